mod generator;
mod rng;
mod seed;
mod state;
mod walk;

pub use generator::{generate_data, generate_data_for};
pub use rng::SeededRng;
pub use seed::{combined_seed, derive_seed, sanitize_random_seed};
pub use state::{SimulatorState, UiEvent};
pub use walk::random_walk;
