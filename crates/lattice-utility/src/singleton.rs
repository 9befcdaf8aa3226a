//! Process-wide, lazily constructed instances keyed by type.
//!
//! The first call to [`instance`] for a type default-constructs it; every
//! later call returns the same `&'static` reference. Instances live until
//! process exit. Mutation goes through the type's own interior mutability.

/// Registry of every instance handed out so far.
static REGISTRY: state::TypeMap![Send + Sync] = <state::TypeMap![Send + Sync]>::new();

/// Returns the shared instance of `T`, creating it on first use.
///
/// When two threads race on the first access, both construct a value but
/// only one is stored; the other is dropped and both callers see the winner.
pub fn instance<T>() -> &'static T
where
    T: Default + Send + Sync + 'static,
{
    if let Some(existing) = REGISTRY.try_get::<T>() {
        return existing;
    }

    if REGISTRY.set(T::default()) {
        log::trace!("singleton created: {}", std::any::type_name::<T>());
    }

    REGISTRY.get::<T>()
}

/// Opt-in accessor for types meant to be used as singletons.
pub trait Singleton: Default + Send + Sync + 'static {
    fn instance() -> &'static Self {
        instance::<Self>()
    }
}
