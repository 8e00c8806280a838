use crate::cli::Args;
use crate::invasion::CityAliens;
use crate::world::World;
use colored::Colorize;
use std::time::{Duration, Instant};

/// One city destroyed by colliding aliens, with everyone involved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestructionEvent {
    pub city: u32,
    pub aliens: Vec<u32>,
}

impl DestructionEvent {
    /// Human-readable announcement for this destruction
    pub fn message(&self, world: &World) -> String {
        format!(
            "{} has been destroyed by {}!",
            world.city_name(self.city),
            format_destroyers(&self.aliens)
        )
    }
}

/// Join alien names with commas, except the last pair which gets " and ".
/// With exactly two aliens this degenerates to "alien I and alien J".
fn format_destroyers(alien_ids: &[u32]) -> String {
    let names: Vec<String> = alien_ids.iter().map(|id| format!("alien {}", id)).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// Main simulation engine: wander steps, destruction passes, driver loop.
/// Every destruction is recorded so callers can audit the run afterwards.
#[derive(Debug, Default)]
pub struct SimulationEngine {
    pub events: Vec<DestructionEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the complete invasion: one destruction pass for collisions on
    /// initial placement, then up to `max_moves + 1` rounds of wander +
    /// destroy, stopping early once the map or the alien set empties.
    pub fn run_invasion(
        &mut self,
        world: &mut World,
        aliens: &mut CityAliens,
        args: &Args,
        rng: &mut fastrand::Rng,
    ) -> Duration {
        let sim_start = Instant::now();

        self.destroy_pass(world, aliens, args);

        for _ in 0..=args.max_moves {
            if world.count_survivors() == 0 || aliens.is_empty() {
                break;
            }
            self.wander_step(world, aliens, rng);
            self.destroy_pass(world, aliens, args);
        }

        sim_start.elapsed()
    }

    /// Move every placed alien along one random outbound road.
    ///
    /// Decisions are made against a snapshot of the assignment taken at step
    /// start, so an alien never moves twice in one step. Aliens in cities
    /// with no outbound roads stay put.
    pub fn wander_step(
        &mut self,
        world: &World,
        aliens: &mut CityAliens,
        rng: &mut fastrand::Rng,
    ) {
        for (from_city, alien_ids) in aliens.snapshot() {
            let destinations = world.destinations(from_city);
            if destinations.is_empty() {
                continue;
            }
            for alien_id in alien_ids {
                let into_city = destinations[rng.usize(..destinations.len())];
                aliens.move_out(from_city, alien_id);
                aliens.move_in(into_city, alien_id);
            }
        }
    }

    /// Destroy every city holding two or more aliens, killing its occupants.
    ///
    /// Evaluated against a snapshot of the assignment taken at pass start;
    /// each destruction is announced and recorded.
    pub fn destroy_pass(&mut self, world: &mut World, aliens: &mut CityAliens, args: &Args) {
        for (city, alien_ids) in aliens.snapshot() {
            if alien_ids.len() < 2 {
                continue;
            }

            world.destroy_city(city);
            aliens.remove_city(city);

            let event = DestructionEvent {
                city,
                aliens: alien_ids,
            };
            self.log_destruction(args, world, &event);
            self.events.push(event);
        }
    }

    /// Log a city destruction event
    #[inline]
    fn log_destruction(&self, args: &Args, world: &World, event: &DestructionEvent) {
        if args.suppress_events {
            return;
        }
        println!(
            "{} {} {}!",
            world.city_name(event.city).bright_red(),
            "has been destroyed by".red(),
            format_destroyers(&event.aliens).yellow()
        );
    }

    /// Print the surviving world and the run summary
    pub fn print_summary(&self, world: &World, args: &Args, simulation_time: Duration) {
        world.print_world();

        let survivors = world.count_survivors();
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("aliens={}", args.aliens).cyan(),
            format!("max_moves={}", args.max_moves).cyan(),
            format!("survivors={}", survivors).cyan(),
        );
    }
}
