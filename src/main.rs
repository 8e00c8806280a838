use alien_invasion::prelude::*;
use alien_invasion::world::parse_world;
use clap::Parser;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Parse the map and place the invaders
    let mut world = parse_world(&args.map)?;
    let mut aliens = CityAliens::invade(&world, args.aliens, &mut rng);

    // Run the invasion
    let mut engine = SimulationEngine::new();
    let simulation_time = engine.run_invasion(&mut world, &mut aliens, &args, &mut rng);

    // Print the surviving world and summary
    engine.print_summary(&world, &args, simulation_time);

    Ok(())
}
