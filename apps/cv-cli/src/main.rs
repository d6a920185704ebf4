use clap::{Parser, Subcommand};
use cv_client::Dispatcher;
use cv_core::{UnitSystem, ensure_finite, rescale_pressure_input};
use cv_model::{CycleRequest, CycleResult, efficiency_from_percent};
use cv_report::{HeaderColumn, header_labels, process_table, render_summary, state_rows};

#[derive(Parser)]
#[command(name = "cv-cli")]
#[command(about = "cycleview CLI - Rankine cycle calculator client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a cycle computation and print the result tables
    Run {
        /// Base URL of the cycle service
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        endpoint: String,
        /// Working fluid identifier
        #[arg(long, default_value = "Water")]
        fluid: String,
        /// Boiler pressure, in the selected units
        #[arg(long)]
        high_pressure: f64,
        /// Condenser pressure, in the selected units
        #[arg(long)]
        low_pressure: f64,
        /// Turbine isentropic efficiency, percent
        #[arg(long, default_value_t = 100.0)]
        turbine_efficiency: f64,
        /// Pump isentropic efficiency, percent
        #[arg(long, default_value_t = 100.0)]
        pump_efficiency: f64,
        /// Unit system: si or imperial
        #[arg(long, default_value = "si")]
        units: UnitSystem,
    },
    /// Rescale pressure inputs after a unit-system change
    Rescale {
        /// Unit system the values should be converted into
        #[arg(long)]
        to: UnitSystem,
        /// Pressure values as currently entered
        #[arg(required = true)]
        values: Vec<f64>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Core(#[from] cv_core::CvError),
    #[error(transparent)]
    Model(#[from] cv_model::ModelError),
    #[error(transparent)]
    Client(#[from] cv_client::ClientError),
}

type CliResult<T> = Result<T, CliError>;

#[tokio::main]
async fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            endpoint,
            fluid,
            high_pressure,
            low_pressure,
            turbine_efficiency,
            pump_efficiency,
            units,
        } => {
            cmd_run(
                &endpoint,
                fluid,
                high_pressure,
                low_pressure,
                turbine_efficiency,
                pump_efficiency,
                units,
            )
            .await
        }
        Commands::Rescale { to, values } => cmd_rescale(to, &values),
    }
}

async fn cmd_run(
    endpoint: &str,
    fluid: String,
    high_pressure: f64,
    low_pressure: f64,
    turbine_efficiency: f64,
    pump_efficiency: f64,
    units: UnitSystem,
) -> CliResult<()> {
    let request = CycleRequest {
        fluid,
        high_pressure,
        low_pressure,
        turbine_efficiency: efficiency_from_percent(turbine_efficiency)?,
        pump_efficiency: efficiency_from_percent(pump_efficiency)?,
        unit_system: units,
    };

    let dispatcher = Dispatcher::new(endpoint)?;
    let reply = match dispatcher.run_cycle(&request).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(%err, "cycle request failed");
            return Err(err.into());
        }
    };

    print_result(&reply.cycle, units);
    Ok(())
}

fn cmd_rescale(to: UnitSystem, values: &[f64]) -> CliResult<()> {
    let profile = to.profile();
    for &value in values {
        ensure_finite(value, "pressure input")?;
        let rescaled = rescale_pressure_input(value, &profile);
        println!("{value} -> {rescaled} {}", profile.labels.pressure);
    }
    Ok(())
}

fn print_result(cycle: &CycleResult, units: UnitSystem) {
    let scale = units.display_scale();
    let labels = header_labels(&scale);
    let unit = |col| {
        labels
            .iter()
            .find(|(c, _)| *c == col)
            .map(|(_, l)| *l)
            .unwrap_or("")
    };

    let summary = render_summary(&cycle.summary);
    println!("Thermal efficiency:   {}", summary.thermal_efficiency);
    println!("Back-work ratio:      {}", summary.back_work_ratio);
    println!("Exergetic efficiency: {}", summary.exergetic_efficiency);

    println!();
    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "State",
        format!("T [{}]", unit(HeaderColumn::Temperature)),
        format!("p [{}]", unit(HeaderColumn::Pressure)),
        format!("v [{}]", unit(HeaderColumn::Volume)),
        format!("h [{}]", unit(HeaderColumn::Energy)),
        format!("s [{}]", unit(HeaderColumn::Entropy)),
        format!("ef [{}]", unit(HeaderColumn::Energy)),
        "x",
    );
    for row in state_rows(&cycle.states, &scale) {
        println!(
            "{:<8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            row.name,
            row.temperature,
            row.pressure,
            row.volume,
            row.enthalpy,
            row.entropy,
            row.exergy,
            row.quality,
        );
    }

    println!();
    let table = process_table(&cycle.processes, &scale);
    println!(
        "{:<12} {:<10} {:>14} {:>14}",
        "Process",
        "Path",
        format!("Q [{}]", unit(HeaderColumn::Energy)),
        format!("W [{}]", unit(HeaderColumn::Energy)),
    );
    for row in &table.rows {
        println!(
            "{:<12} {:<10} {:>14} {:>14}",
            row.name, row.transition, row.heat, row.work,
        );
    }
    println!(
        "{:<12} {:<10} {:>14} {:>14}",
        "Total", "", table.heat_total, table.work_total,
    );
}
