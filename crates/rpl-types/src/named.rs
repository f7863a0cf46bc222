/// Anything that can live in a name-keyed store.
///
/// The returned name is the uniqueness key: no two items in one store may
/// report the same name. Implementors keep the name private so it cannot be
/// changed after construction.
pub trait Named {
    fn name(&self) -> &str;
}
