//! `search <name>`

use super::{griddb_client, Context};
use crate::output::{print_json, OutputFormat};
use clap::{ArgAction, Args};
use serde::Serialize;
use shortcut_core::griddb::{ImageResult, SearchResult};
use shortcut_core::{ArtworkSource, ImageCategory};
use std::collections::BTreeMap;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Game name to search for
    pub name: String,

    /// SteamGridDB API key
    #[arg(short = 'k', long, env = "STEAMGRIDDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Number of search results to return
    #[arg(short = 'n', long, default_value_t = 1)]
    pub num_results: usize,

    /// Number of image results to return for a given image type
    #[arg(long, default_value_t = 1)]
    pub num_images: usize,

    /// Include grid images in search
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    pub grids: bool,

    /// Include hero images in search
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    pub heroes: bool,

    /// Include logo images in search
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    pub logos: bool,

    /// Include icon images in search
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1,
          default_missing_value = "true", require_equals = true)]
    pub icons: bool,
}

impl SearchArgs {
    fn categories(&self) -> Vec<ImageCategory> {
        [
            (self.grids, ImageCategory::Grid),
            (self.heroes, ImageCategory::Hero),
            (self.logos, ImageCategory::Logo),
            (self.icons, ImageCategory::Icon),
        ]
        .into_iter()
        .filter_map(|(enabled, category)| enabled.then_some(category))
        .collect()
    }
}

/// Images found for one matching game.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub details: SearchResult,
    pub grids: Vec<ImageResult>,
    pub heroes: Vec<ImageResult>,
    pub logos: Vec<ImageResult>,
    pub icons: Vec<ImageResult>,
}

impl SearchOutput {
    fn new(details: SearchResult) -> Self {
        Self {
            details,
            grids: Vec::new(),
            heroes: Vec::new(),
            logos: Vec::new(),
            icons: Vec::new(),
        }
    }

    fn images_mut(&mut self, category: ImageCategory) -> &mut Vec<ImageResult> {
        match category {
            ImageCategory::Grid => &mut self.grids,
            ImageCategory::Hero => &mut self.heroes,
            ImageCategory::Logo => &mut self.logos,
            ImageCategory::Icon => &mut self.icons,
        }
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n  App ID: {}\n", self.details.name, self.details.id);
        let sections = [
            ("Grid", &self.grids),
            ("Logo", &self.logos),
            ("Icon", &self.icons),
            ("Hero", &self.heroes),
        ];
        for (label, images) in sections {
            for image in images {
                out.push_str(&format!(
                    "  {} Images\n    Author: {}\n    URL: {}\n",
                    label, image.author.name, image.url
                ));
            }
        }
        out
    }
}

/// Search and fetch up to `num_images` per enabled category for each hit.
pub async fn search(
    source: &dyn ArtworkSource,
    args: &SearchArgs,
) -> anyhow::Result<Vec<SearchOutput>> {
    let results = source.search(&args.name).await?;
    let categories = args.categories();

    let mut outputs = Vec::new();
    for result in results.into_iter().take(args.num_results) {
        let mut output = SearchOutput::new(result);
        for &category in &categories {
            let mut images = source
                .fetch_category_images(output.details.id, category, &[])
                .await?;
            images.truncate(args.num_images);
            *output.images_mut(category) = images;
        }
        outputs.push(output);
    }
    Ok(outputs)
}

pub async fn run(ctx: &Context, args: SearchArgs) -> anyhow::Result<()> {
    let client = griddb_client(args.api_key.as_deref())?;
    let outputs = search(&client, &args).await?;

    match ctx.output {
        OutputFormat::Term => {
            for output in &outputs {
                print!("{}", output.render());
            }
            Ok(())
        }
        OutputFormat::Json => {
            let keyed: BTreeMap<String, &SearchOutput> = outputs
                .iter()
                .map(|o| (o.details.id.to_string(), o))
                .collect();
            print_json(&keyed)
        }
    }
}
