use anyhow::{Context, Result};
use clap::Parser;
use forage_cure_core::{
    checked, fresh_to_dry_basis, CuringInput, CuringSeries, HarvestLosses, ModelConstants,
    SwathState, WeatherSample,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Hay curing demo: dries a cut swath day by day until it reaches baling moisture
#[derive(Parser, Debug)]
#[command(name = "forage-cure-demo")]
#[command(about = "Field curing and harvest/storage loss demo", long_about = None)]
struct Args {
    /// Moisture at mowing (fresh basis, 0-1)
    #[arg(short, long, default_value_t = 0.80)]
    moisture: f64,

    /// Solar insolation in W/m²
    #[arg(short, long, default_value_t = 450.0)]
    insolation: f64,

    /// Air temperature in °C
    #[arg(short, long, default_value_t = 22.0)]
    temperature: f64,

    /// Surface soil moisture (% dry basis)
    #[arg(long, default_value_t = 20.0)]
    soil_moisture: f64,

    /// Drying hours per day
    #[arg(short, long, default_value_t = 12.0)]
    day_length: f64,

    /// Rain each night after the mowing day, in mm
    #[arg(short, long, default_value_t = 0.0)]
    rain: f64,

    /// Wind speed in m/s
    #[arg(short, long, default_value_t = 3.0)]
    wind_speed: f64,

    /// Relative humidity (0-1)
    #[arg(long, default_value_t = 0.6)]
    humidity: f64,

    /// Swath density in g/m²
    #[arg(short = 's', long, default_value_t = 450.0)]
    swath_density: f64,

    /// Cut number within the season
    #[arg(short, long, default_value_t = 1)]
    cut: u32,

    /// Mow without a conditioner
    #[arg(long)]
    unconditioned: bool,

    /// Ted the swath on the morning of day 2
    #[arg(long)]
    ted: bool,

    /// Legume-leaf fraction of the crop (0-1)
    #[arg(long, default_value_t = 0.4)]
    legume_fraction: f64,

    /// Neutral detergent fibre fraction (0-1)
    #[arg(long, default_value_t = 0.45)]
    ndf: f64,

    /// Crop maturity multiplier for mowing loss
    #[arg(long, default_value_t = 1.0)]
    stage_factor: f64,

    /// Target baling moisture (fresh basis)
    #[arg(long, default_value_t = 0.20)]
    target: f64,

    /// Give up after this many days
    #[arg(long, default_value_t = 7)]
    max_days: u32,

    /// TOML file overriding the model constants
    #[arg(long)]
    constants: Option<std::path::PathBuf>,

    /// Also report silage losses for a crop ensiled at this DM fraction
    #[arg(long)]
    silage_dmc: Option<f64>,

    /// Dry matter ensiled, in tonnes
    #[arg(long, default_value_t = 100.0)]
    silage_mass: f64,
}

fn load_constants(args: &Args) -> Result<ModelConstants> {
    match &args.constants {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ModelConstants::from_toml_str(&source)
                .with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(ModelConstants::default()),
    }
}

fn print_series(day: u32, series: &CuringSeries) {
    let hourly: Vec<String> = series
        .as_slice()
        .iter()
        .map(|m| format!("{:.3}", m))
        .collect();
    println!("Day {}: {}", day, hourly.join(" "));
}

/// Respiration over one curing day; a flat series (no drying hours, or zero drying
/// rate) has no moisture change to integrate over and loses nothing
fn day_respiration(series: &CuringSeries, temperature: f64, hours: f64) -> Result<f64> {
    if series.len() == 1 || series.start() == series.end() {
        return Ok(0.0);
    }
    let loss = checked::loss_respiration(series.start(), series.end(), temperature, hours)?;
    Ok(loss)
}

/// Hay storage loss, or `None` while the swath is still too wet to bale
fn hay_storage_at_baling(moisture: f64, target: f64) -> Result<Option<f64>> {
    if moisture > target {
        return Ok(None);
    }
    let loss = checked::loss_hay_storage(fresh_to_dry_basis(moisture))?;
    Ok(Some(loss))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let constants = load_constants(&args)?;
    info!(?constants, "model constants");

    println!("=== Forage Curing Demo ===\n");

    let weather = WeatherSample::new(
        args.insolation,
        args.temperature,
        args.day_length,
        0.0,
        args.wind_speed,
        args.humidity,
    )
    .with_soil_moisture(args.soil_moisture);
    let mut input = CuringInput {
        weather,
        swath: SwathState::new(args.moisture, args.swath_density, !args.unconditioned, args.cut),
        mowed: true,
        raked: false,
    };

    let mut losses = HarvestLosses {
        mowing: checked::loss_mowing(args.stage_factor, !args.unconditioned, args.legume_fraction)?,
        ..HarvestLosses::default()
    };

    let mut day = 1;
    let mut moisture: f64;
    loop {
        let series = checked::curing(&input, &constants)?;
        print_series(day, &series);

        losses.respiration +=
            day_respiration(&series, args.temperature, args.day_length.trunc())?;
        moisture = series.end();

        if let Some(hour) = series.hours_to_reach(args.target) {
            println!("Baling moisture reached after {} h on day {}", hour, day);
            break;
        }
        if day >= args.max_days {
            warn!(day, moisture, "target moisture not reached");
            break;
        }

        // Next morning: the swath has sat out overnight
        day += 1;
        input.mowed = false;
        input.weather.rainfall = args.rain.into();
        input.swath.moisture = moisture.into();
        if args.rain > 0.0 {
            losses.rain += checked::loss_rain(
                moisture,
                !args.unconditioned,
                args.ndf,
                args.rain,
                args.swath_density,
            )?;
        }
        if args.ted && day == 2 {
            losses.tedding = checked::loss_tedding(moisture, args.legume_fraction)?;
        }
    }

    // Raked into a windrow at the end of the last curing day
    losses.raking = checked::loss_raking(moisture, args.legume_fraction, args.swath_density)?;

    println!("\nFinal moisture after {} day(s): {:.3}", day, moisture);
    println!("Harvest losses (fraction of DM):");
    println!("  respiration {:.4}", losses.respiration);
    println!("  rain        {:.4}", losses.rain);
    println!("  mowing      {:.4}", losses.mowing);
    println!("  tedding     {:.4}", losses.tedding);
    println!("  raking      {:.4}", losses.raking);
    println!("  total       {:.4}", losses.total());

    match hay_storage_at_baling(moisture, args.target)? {
        Some(hay_loss) => println!("\nHay storage loss at baling moisture: {:.4}", hay_loss),
        None => println!(
            "\nSwath not balable: {:.3} is above the {:.3} target after {} day(s)",
            moisture, args.target, day
        ),
    }

    if let Some(dmc) = args.silage_dmc {
        println!("\nSilage at {:.0}% DM, {:.0} t DM:", dmc * 100.0, args.silage_mass);
        println!("  fermentation loss {:.4}", checked::loss_fermentation(dmc)?);
        for elapsed in [1, 10, 79, 80] {
            println!(
                "  effluent day {:>2}   {:.4} t DM/day",
                elapsed,
                checked::loss_effluent(dmc, args.silage_mass, elapsed)?
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_day(insolation: f64, temperature: f64, day_length: f64) -> CuringSeries {
        let input = CuringInput {
            weather: WeatherSample::new(insolation, temperature, day_length, 0.0, 3.0, 0.6),
            swath: SwathState::new(0.80, 450.0, true, 1),
            mowed: true,
            raked: false,
        };
        checked::curing(&input, &ModelConstants::default()).unwrap()
    }

    #[test]
    fn test_short_day_has_no_respiration() {
        let series = one_day(450.0, 22.0, 0.5);
        assert_eq!(series.len(), 1);
        assert_eq!(day_respiration(&series, 22.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_flat_series_has_no_respiration() {
        let series = one_day(0.0, 0.0, 12.0);
        assert_eq!(series.start(), series.end());
        assert_eq!(day_respiration(&series, 0.0, 12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_drying_day_respires() {
        let series = one_day(450.0, 22.0, 12.0);
        assert!(day_respiration(&series, 22.0, 12.0).unwrap() > 0.0);
    }

    #[test]
    fn test_wet_swath_is_not_balable() {
        assert!(hay_storage_at_baling(0.75, 0.20).unwrap().is_none());
        let loss = hay_storage_at_baling(0.18, 0.20).unwrap().unwrap();
        assert!(loss > 0.0 && loss < 1.0);
    }
}
