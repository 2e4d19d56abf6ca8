// ABOUTME: SeaORM entities for the fractal tournament tables and their relationships
// ABOUTME: Exports users, fractals, participants, voting rounds, and votes

pub mod user;
pub mod fractal;
pub mod participant;
pub mod voting_round;
pub mod vote;

pub use user::Entity as User;
pub use fractal::Entity as Fractal;
pub use participant::Entity as Participant;
pub use voting_round::Entity as VotingRound;
pub use vote::Entity as Vote;
