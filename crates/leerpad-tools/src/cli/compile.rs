use crate::cli::opt;
use leerpad_config::course;
use leerpad_utils::loader::file_system::FileSystemLoader;

pub(crate) async fn exec(opt: opt::Compile) -> Result<(), anyhow::Error> {
    let opt::Compile { path, output } = opt;

    let loader = FileSystemLoader::new(path);
    let course = course::load(&loader).await?;
    let json = serde_json::to_string_pretty(&course)?;

    match output {
        Some(target) => {
            std::fs::write(&target, json)?;
            println!("Wrote course '{}' to {}", course.id, target.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
