use crate::modules::Module;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 5000;

// Lecture material shipped with the deployment; switching documents means
// redeploying, not reconfiguring.
const CTSE_PDF_PATH: &str = "data/CTSE_LEC_2_PART_1.pdf";
const IUP_PDF_PATH: &str = "data/IUP_LEC_5.pdf";

/// Process configuration, resolved once at startup and passed down
/// explicitly. A missing API key is not an error here; it surfaces as a
/// provider authentication failure on first use.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub port: u16,
    pub ctse_pdf_path: PathBuf,
    pub iup_pdf_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            port,
            ctse_pdf_path: PathBuf::from(CTSE_PDF_PATH),
            iup_pdf_path: PathBuf::from(IUP_PDF_PATH),
        }
    }

    pub fn pdf_path(&self, module: Module) -> &Path {
        match module {
            Module::Ctse => &self.ctse_pdf_path,
            Module::Iup => &self.iup_pdf_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            openai_api_key: "test-key".to_string(),
            port: DEFAULT_PORT,
            ctse_pdf_path: PathBuf::from("data/ctse.pdf"),
            iup_pdf_path: PathBuf::from("data/iup.pdf"),
        }
    }

    #[test]
    fn each_module_resolves_to_its_own_pdf() {
        let config = test_config();
        assert_eq!(config.pdf_path(Module::Ctse), Path::new("data/ctse.pdf"));
        assert_eq!(config.pdf_path(Module::Iup), Path::new("data/iup.pdf"));
    }
}
