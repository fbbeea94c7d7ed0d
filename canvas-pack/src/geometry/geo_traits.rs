/// Trait for types that can detect collisions between `self` and `other` of type `T`.
/// Touching boundaries count as a collision.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can fully enclose `other` of type `T` (boundaries inclusive).
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}
