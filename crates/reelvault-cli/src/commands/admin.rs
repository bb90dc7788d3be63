use std::path::PathBuf;

use color_eyre::eyre::{bail, Context, Result};
use reelvault_config::{Config, PathManager};
use reelvault_models::NewMovie;
use reelvault_store::{Catalog, UploadStore};
use tracing::warn;

pub struct AddArgs {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub description: String,
    pub trailer: String,
    pub source_url: String,
    pub source_type: String,
    pub poster_url: String,
    pub download_url: String,
    pub poster_file: Option<PathBuf>,
    pub video_file: Option<PathBuf>,
    pub admin_key: String,
}

pub fn run_add(
    catalog: &Catalog,
    paths: &PathManager,
    config: &Config,
    args: AddArgs,
    json: bool,
) -> Result<()> {
    if !config.verify_admin_key(&args.admin_key) {
        warn!("rejected movie creation with a bad admin key");
        bail!("unauthorized: admin key does not match");
    }

    let uploads = UploadStore::with_limit(paths.upload_dir(), config.max_upload_bytes);

    // Local files win over URLs, same as the admin form.
    let poster = match &args.poster_file {
        Some(file) => store_local_file(&uploads, file)?,
        None => args.poster_url,
    };
    let source = match &args.video_file {
        Some(file) => store_local_file(&uploads, file)?,
        None => args.source_url,
    };

    let movie = catalog.create_movie(NewMovie {
        title: args.title,
        year: args.year,
        genre: args.genre,
        description: args.description,
        poster,
        source,
        source_type: args.source_type,
        download: args.download_url,
        trailer: args.trailer,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&movie)?);
    } else {
        println!("Added \"{}\" ({}) -> {}", movie.title, movie.year, movie.slug);
    }
    Ok(())
}

fn store_local_file(uploads: &UploadStore, file: &PathBuf) -> Result<String> {
    let bytes = std::fs::read(file)
        .wrap_err_with(|| format!("could not read {}", file.display()))?;
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin");
    Ok(uploads.store(name, &bytes)?)
}
