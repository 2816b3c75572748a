use crate::loader::error::LoadingError;
use crate::loader::file::File;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;

pub mod error;
pub mod file;
pub mod file_system;

#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        let Some(extension) = extension else {
            return false;
        };
        let allowed_extensions: &[&str] = match self {
            Filter::Yaml => &["yaml", "yml"],
            Filter::Any => return true,
        };
        allowed_extensions.contains(&extension)
    }
}

pub trait LoaderTrait {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;
    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_yaml() {
        assert!(Filter::Yaml.apply("modules/intro.yaml"));
        assert!(Filter::Yaml.apply("modules/intro.yml"));
        assert!(!Filter::Yaml.apply("modules/intro.md"));
        assert!(!Filter::Yaml.apply("modules/yaml"));
        assert!(Filter::Any.apply("anything.txt"));
        assert!(!Filter::Any.apply("no-extension"));
    }
}
