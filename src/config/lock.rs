#[cfg(feature = "std")]
type Slot<T> = std::sync::OnceLock<T>;

#[cfg(not(feature = "std"))]
type Slot<T> = spin::Once<T>;

/// A value that is written at most once and read without locking afterwards.
#[repr(transparent)]
pub(crate) struct InstallOnce<T: 'static + Send + Sync>(Slot<T>);

impl<T: 'static + Send + Sync> InstallOnce<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(Slot::new())
    }

    #[inline]
    pub(crate) fn get(&'static self) -> Option<&'static T> {
        self.0.get()
    }

    /// Stores `value` unless a value was already stored, in which case
    /// `value` is handed back.
    pub(crate) fn install(&'static self, value: T) -> Result<(), T> {
        #[cfg(feature = "std")]
        let result = self.0.set(value);

        #[cfg(not(feature = "std"))]
        let result = {
            let mut pending = Some(value);
            self.0.call_once(|| {
                pending
                    .take()
                    .expect("Install closure is called at most once")
            });
            match pending {
                None => Ok(()),
                Some(value) => Err(value),
            }
        };

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_once() {
        static SLOT: InstallOnce<u32> = InstallOnce::new();

        assert_eq!(SLOT.get(), None);
        assert_eq!(SLOT.install(1), Ok(()));
        assert_eq!(SLOT.install(2), Err(2));
        assert_eq!(SLOT.get(), Some(&1));
    }
}
