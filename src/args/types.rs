use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Endpoint the dashboard reads its stats snapshot from, once per page load.
    #[arg(
        short = 's',
        long,
        value_name = "STATS_URL",
        default_value = "http://127.0.0.1:8081/api/stats",
        value_parser = crate::args::validation::check_url
    )]
    pub stats_url: String,
    /// If specified, this snapshot file is served at /api/stats. It must parse as a stats snapshot.
    #[arg(
        long,
        value_name = "STATS_JSON",
        value_parser = crate::args::validation::check_readable_stats_json
    )]
    pub stats_json: Option<PathBuf>,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
    #[arg(short = 't', long, value_name = "TITLE", default_value = crate::view::index::DEFAULT_INDEX_TITLE)]
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub stats_url: String,
    pub stats_json: Option<PathBuf>,
    /// Only set when the directory exists, so `/static` is never mounted on nothing.
    pub static_dir: Option<PathBuf>,
    pub title: String,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        let static_dir = args.static_dir.is_dir().then_some(args.static_dir);
        Self {
            bind: args.bind,
            port: args.port,
            stats_url: args.stats_url,
            stats_json: args.stats_json,
            static_dir,
            title: args.title,
        }
    }
}
