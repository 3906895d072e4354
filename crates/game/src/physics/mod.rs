mod character;
mod layers;
mod world;

pub use character::CharacterPhysics;
pub use layers::CollisionLayers;
pub use world::PhysicsWorld;
