//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PagerConfig;
use crate::dataset::CsvFileProvider;
use crate::error::{Error, Result};
use crate::pagination::{PageRequest, Paginator};
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        if let Commands::Serve { port } = &self.cli.command {
            let config = crate::cli::ServerConfig { pager: config };
            return crate::cli::serve(config, *port).await;
        }

        let output = self.execute(&config)?;
        println!("{}", self.render(&output)?);
        Ok(())
    }

    /// Load configuration, applying command-line overrides
    pub fn load_config(&self) -> Result<PagerConfig> {
        let config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        };

        Ok(match &self.cli.data {
            Some(path) => config.with_data_file(path),
            None => config,
        })
    }

    /// Execute a one-shot command and return its JSON output
    pub fn execute(&self, config: &PagerConfig) -> Result<Value> {
        match &self.cli.command {
            Commands::Range { page, page_size } => {
                let page_size = page_size_or_default(*page_size, config);
                let (start, end) = PageRequest::new(*page, page_size)?.range();
                Ok(json!({ "start": start, "end": end }))
            }
            Commands::Page { page, page_size } => {
                let page_size = page_size_or_default(*page_size, config);
                config.check_page_size(page_size)?;
                let records = paginator(config).get_page(*page, page_size)?;
                Ok(serde_json::to_value(records)?)
            }
            Commands::Hyper { page, page_size } => {
                let page_size = page_size_or_default(*page_size, config);
                config.check_page_size(page_size)?;
                let hyper = paginator(config).get_hyper(*page, page_size)?;
                Ok(serde_json::to_value(hyper)?)
            }
            Commands::HyperIndex { index, page_size } => {
                let page_size = page_size_or_default(*page_size, config);
                config.check_page_size(page_size)?;
                let hyper = paginator(config).get_hyper_index(*index, page_size)?;
                Ok(serde_json::to_value(hyper)?)
            }
            Commands::Serve { .. } => Err(Error::config(
                "serve is a long-running command; use Runner::run",
            )),
        }
    }

    /// Format command output according to `--format`
    pub fn render(&self, output: &Value) -> Result<String> {
        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string(output)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(output)?,
        })
    }
}

fn paginator(config: &PagerConfig) -> Paginator<CsvFileProvider> {
    Paginator::new(CsvFileProvider::from_config(config))
}

fn page_size_or_default(page_size: Option<i64>, config: &PagerConfig) -> i64 {
    page_size.unwrap_or_else(|| i64::try_from(config.default_page_size).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset(rows: usize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Year,Gender,Ethnicity,Name,Count,Rank").unwrap();
        for i in 0..rows {
            writeln!(file, "2016,FEMALE,HISPANIC,Name{i},{},{}", 100 - i, i + 1).unwrap();
        }
        file
    }

    fn runner(file: &NamedTempFile, args: &[&str]) -> Runner {
        let data = file.path().to_string_lossy().to_string();
        let mut argv = vec!["hyperpage", "--data", data.as_str()];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    fn execute(runner: &Runner) -> Result<Value> {
        let config = runner.load_config()?;
        runner.execute(&config)
    }

    #[test]
    fn test_range_command() {
        let file = dataset(0);
        let runner = runner(&file, &["range", "--page", "3", "--page-size", "15"]);

        assert_eq!(execute(&runner).unwrap(), json!({ "start": 30, "end": 45 }));
    }

    #[test]
    fn test_range_uses_default_page_size() {
        let file = dataset(0);
        let runner = runner(&file, &["range", "--page", "2"]);

        assert_eq!(execute(&runner).unwrap(), json!({ "start": 10, "end": 20 }));
    }

    #[test]
    fn test_page_command() {
        let file = dataset(25);
        let runner = runner(&file, &["page", "--page", "3", "--page-size", "10"]);

        let output = execute(&runner).unwrap();
        let rows = output.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0][3], "Name20");
    }

    #[test]
    fn test_hyper_command() {
        let file = dataset(25);
        let runner = runner(&file, &["hyper", "--page", "1"]);

        let output = execute(&runner).unwrap();
        assert_eq!(output["total_pages"], 3);
        assert_eq!(output["next_page"], 2);
        assert_eq!(output["prev_page"], Value::Null);
    }

    #[test]
    fn test_hyper_index_command() {
        let file = dataset(25);
        let runner = runner(&file, &["hyper-index", "--index", "20", "--page-size", "10"]);

        let output = execute(&runner).unwrap();
        assert_eq!(output["index"], 20);
        assert_eq!(output["next_index"], 30);
        assert_eq!(output["data"].as_array().unwrap().len(), 10);
        assert_eq!(output["data"][9], json!([]));
    }

    #[test]
    fn test_hyper_index_negative_index() {
        let file = dataset(25);
        let runner = runner(&file, &["hyper-index", "--index", "-1"]);

        let err = execute(&runner).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_page_size_ceiling() {
        let file = dataset(25);
        let runner = runner(&file, &["page", "--page-size", "10001"]);

        let err = execute(&runner).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_missing_data_file() {
        let runner = Runner::new(
            Cli::try_parse_from(["hyperpage", "--data", "/no/such.csv", "page"]).unwrap(),
        );

        assert!(matches!(
            execute(&runner),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_config_file_sets_page_size() {
        let file = dataset(25);
        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "default_page_size: 4").unwrap();
        let config_path = config.path().to_string_lossy().to_string();

        let runner = runner(&file, &["-C", config_path.as_str(), "hyper"]);
        let output = execute(&runner).unwrap();

        assert_eq!(output["page_size"], 4);
        assert_eq!(output["total_pages"], 7);
    }

    #[test]
    fn test_render_formats() {
        let file = dataset(0);
        let compact = runner(&file, &["range"]);
        let pretty = runner(&file, &["--format", "pretty", "range"]);
        let value = json!({ "start": 0, "end": 10 });

        let rendered = compact.render(&value).unwrap();
        assert!(!rendered.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&rendered).unwrap(), value);

        let rendered = pretty.render(&value).unwrap();
        assert!(rendered.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&rendered).unwrap(), value);
    }
}
