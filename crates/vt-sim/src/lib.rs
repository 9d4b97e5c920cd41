//! `vt-sim` — the vehicle movement simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Step   — advance every vehicle once through the state machine
//!              (parallel with the `parallel` feature):
//!                Moving, interior waypoint → kinematics advance
//!                Moving, last waypoint     → hop to a random outgoing edge,
//!                                            or start Waiting at a dead end
//!                Waiting                   → decrement; re-enter Moving at 0
//!   ② Record — hand the post-transition population to the observer,
//!              in stable vehicle order (one trajectory row per vehicle).
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`vehicle`]   | `Vehicle`, `VehicleState`                               |
//! | [`spawn`]     | random placement of the initial population              |
//! | [`kinematics`]| one-tick advance along the current polyline             |
//! | [`policy`]    | uniform next-edge choice at an intersection             |
//! | [`step`]      | the per-vehicle state machine                           |
//! | [`sim`]       | `Sim` — clock-driven run loop                           |
//! | [`builder`]   | `SimBuilder` — validation + fleet spawn                 |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                     |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_core::SimConfig;
//! use vt_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), &network).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod kinematics;
pub mod observer;
pub mod policy;
pub mod sim;
pub mod spawn;
pub mod step;
pub mod vehicle;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use vehicle::{Vehicle, VehicleState};
