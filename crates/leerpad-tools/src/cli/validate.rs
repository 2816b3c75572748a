use crate::cli::opt;
use anyhow::bail;
use leerpad_config::validate;
use leerpad_utils::loader::file_system::FileSystemLoader;

pub(crate) async fn exec(opt: opt::Validate) -> Result<(), anyhow::Error> {
    let opt::Validate { path, json, strict } = opt;

    let loader = FileSystemLoader::new(path);
    let report = validate::run(&loader).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for violation in &report.errors {
            println!("error[{}] {}: {}", violation.kind, violation.path, violation.message);
        }
        for violation in &report.warnings {
            println!("warning[{}] {}: {}", violation.kind, violation.path, violation.message);
        }
        println!("{} errors, {} warnings", report.errors.len(), report.warnings.len());
    }

    if !report.is_ok() {
        bail!("course validation failed");
    }
    if strict && !report.warnings.is_empty() {
        bail!("course validation produced warnings and --strict is set");
    }
    Ok(())
}
