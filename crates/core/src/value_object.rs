//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are domain objects that have **no identity** and are
/// **compared by value**. Two value objects with the same attributes are equal.
///
/// - **Value Object**: `Money(15000)`, `Grade::A`
/// - **Entity**: `Patient { id: PatientId(1), .. }` (same id means same patient)
///
/// To "modify" a value object, create a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
