use corbit_vis::{load_run, resolve_styles, run_3d, ViewerConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "run.dat")]
    file_name: String,

    #[arg(short, long)]
    config: Option<PathBuf>,
}

// load here to keep main clean
fn load_viewer_config(path: Option<&PathBuf>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: ViewerConfig = serde_yaml::from_reader(reader)?;

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_viewer_config(args.config.as_ref())?;

    let store = load_run(Path::new(&args.file_name))
        .with_context(|| format!("loading run file '{}'", args.file_name))?;

    let header = *store.header();
    println!(
        "> {} planets and {} probes found.",
        header.n_planets,
        header.n_probes()
    );

    let styles = resolve_styles(header.n_bodies, header.n_planets);
    run_3d(store, styles, config);

    Ok(())
}
