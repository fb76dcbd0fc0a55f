use clap::{Parser, Subcommand};
use jobsearch::config::Config;
use jobsearch::db;
use jobsearch::jobs::BatchStatus;
use jobsearch::{JobInstance, JobInstanceRepo, SearchableJobInstances};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jobsctl",
    about = "Read-only queries over batch job instances",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count instances with the given job name.
    Count { name: String },
    /// List instances that have run, newest first.
    List {
        #[arg(long)]
        name: Option<String>,
        /// Execution status, matched verbatim (COMPLETED, STARTING, STARTED,
        /// STOPPING, STOPPED, FAILED, ABANDONED, UNKNOWN or any custom value).
        #[arg(long)]
        state: Option<String>,
        #[arg(long, default_value_t = 0)]
        start: i64,
        #[arg(long, default_value_t = 20)]
        count: i64,
        #[arg(long)]
        json: bool,
    },
    /// Distinct job names.
    Names,
    /// Show a single instance by id.
    Show { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = Config::from_env()?;
    let pool = db::make_pool(&cfg).await?;
    let repo = JobInstanceRepo::from_pool(pool, cfg.table_prefix.clone())?;

    match cli.command {
        Command::Count { name } => {
            let n = repo.count_job_instances(&name).await?;
            println!("{n}");
        }
        Command::List {
            name,
            state,
            start,
            count,
            json,
        } => {
            if let Some(s) = state.as_deref() {
                if s.parse::<BatchStatus>().is_err() {
                    warn!(state = s, "not a standard batch status, filtering on it verbatim");
                }
            }
            list(&repo, name.as_deref(), state.as_deref(), start, count, json).await?;
        }
        Command::Names => {
            for name in repo.store().get_job_names().await? {
                println!("{name}");
            }
        }
        Command::Show { id } => match repo.store().get_job_instance(id).await? {
            Some(inst) => print_instance(&inst),
            None => {
                eprintln!("job instance {id} not found");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

async fn list(
    search: &dyn SearchableJobInstances,
    name: Option<&str>,
    state: Option<&str>,
    start: i64,
    count: i64,
    json: bool,
) -> anyhow::Result<()> {
    let page = search.get_job_instances(name, state, start, count).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.is_empty() {
        println!("(no job instances)");
    }
    for inst in &page {
        print_instance(inst);
    }
    Ok(())
}

fn print_instance(inst: &JobInstance) {
    println!("id={} name={} version={}", inst.id, inst.name, inst.version);
}
