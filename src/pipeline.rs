use std::fmt;
use std::path::Path;

use cli_table::Table;
use log::info;
use reqwest::Client;

use crate::service::oref;
use crate::{area, district, util, Mapping, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Areas,
    Districts,
}

#[derive(Debug, Table)]
pub struct Summary {
    #[table(title = "Dataset")]
    pub pipeline: Pipeline,
    #[table(title = "Entries")]
    pub entries: usize,
    #[table(title = "Output")]
    pub output: String,
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Pipeline {
    /// In the order they run.
    pub const ALL: [Pipeline; 2] = [Pipeline::Areas, Pipeline::Districts];

    pub fn name(self) -> &'static str {
        match self {
            Pipeline::Areas => "areas",
            Pipeline::Districts => "districts",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Pipeline::Areas => oref::AREAS_FILE,
            Pipeline::Districts => oref::DISTRICTS_FILE,
        }
    }

    pub async fn fetch(self, client: &Client) -> Result<String> {
        match self {
            Pipeline::Areas => oref::fetch_areas_page(client).await,
            Pipeline::Districts => oref::fetch_districts(client).await,
        }
    }

    pub fn extract(self, body: &str) -> Result<Mapping> {
        match self {
            Pipeline::Areas => area::extract_areas(body),
            Pipeline::Districts => district::extract_districts(body),
        }
    }

    /// Extracts `body` and writes the result into `dir`. Nothing is written
    /// if extraction fails.
    pub fn finish(self, body: &str, dir: &Path) -> Result<Summary> {
        let mapping = self.extract(body)?;
        info!("{}: {} entries", self, mapping.len());

        let path = dir.join(self.file_name());
        util::write_mapping(&path, &mapping)?;
        info!("{}: wrote {}", self, path.display());

        Ok(Summary {
            pipeline: self,
            entries: mapping.len(),
            output: path.display().to_string(),
        })
    }

    pub async fn run(self, client: &Client, dir: &Path) -> Result<Summary> {
        let body = self.fetch(client).await?;
        self.finish(&body, dir)
    }
}
