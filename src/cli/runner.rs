//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{Error, Result, ResultExt};
use crate::page::{Page, Paginator};
use crate::pagination::{
    resolve_page_number, resolve_page_size, JsonApiPagination, PageNumberPagination,
};
use crate::query::{replace_query_param, RequestContext};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

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

        match &self.cli.command {
            Commands::Links {
                url,
                count,
                page,
                page_size,
            } => self.links(&config, url, *count, page.as_deref(), *page_size),
            Commands::Paginate { input, url } => self.paginate(&config, input, url.as_deref()),
            Commands::Serve { input, port, host } => {
                let mut config = config;
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(host) = host {
                    config.server.host.clone_from(host);
                }
                let records = load_records(input)?;
                crate::cli::serve(config, records).await
            }
            Commands::Settings => self.settings(&config),
        }
    }

    /// Load the config file, or defaults when none is given
    fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => AppConfig::load(path),
            None => Ok(AppConfig::default()),
        }
    }

    /// Print meta and links for a collection size
    fn links(
        &self,
        config: &AppConfig,
        url: &str,
        count: u64,
        page: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<()> {
        let settings = &config.pagination;

        let mut url = url.to_string();
        if let Some(page) = page {
            url = replace_query_param(&url, &settings.page_query_param, page)?;
        }
        if let Some(size) = page_size {
            let param = settings
                .page_size_query_param
                .as_deref()
                .ok_or_else(|| Error::config("--page-size needs a page_size_query_param"))?;
            url = replace_query_param(&url, param, &size.to_string())?;
        }
        let request = RequestContext::new(url);

        let paginator = Paginator::new(count, resolve_page_size(settings, Some(&request)))
            .with_orphans(settings.orphans)
            .with_allow_empty_first_page(settings.allow_empty_first_page);
        let number = resolve_page_number(settings, Some(&request), &paginator)?;
        let page: Page<Value> = Page::new(number, Vec::new(), paginator);

        let pagination = PageNumberPagination::new(settings.clone(), page, Some(request));
        let links = pagination.pagination_links()?;
        let output = json!({
            "meta": { "pagination": pagination.pagination_meta() },
            "links": links,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Paginate a JSON array file and print the envelope
    fn paginate(&self, config: &AppConfig, input: &Path, url: Option<&str>) -> Result<()> {
        let records = load_records(input)?;
        let request = url.map(RequestContext::new);

        let response =
            PageNumberPagination::paginate(&config.pagination, &records, request.as_ref())?
                .into_response()?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }

    /// Print the effective configuration
    fn settings(&self, config: &AppConfig) -> Result<()> {
        print!("{}", serde_yaml::to_string(config)?);
        Ok(())
    }
}

/// Read a JSON file holding an array of records
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;

    match serde_json::from_str::<Value>(&content)? {
        Value::Array(records) => {
            tracing::info!(count = records.len(), path = %path.display(), "Loaded records");
            Ok(records)
        }
        other => Err(Error::config(format!(
            "{} must hold a JSON array, found {}",
            path.display(),
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
