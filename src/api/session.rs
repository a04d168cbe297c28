use std::ops::{Deref, DerefMut};

use crate::api::Api;

/// Guard which keeps the session open and closes it on drop, even when unwinding.
#[must_use = "the session gets closed as soon as the guard is dropped"]
pub struct ScopedSession<'a>(&'a mut Api);

impl<'a> ScopedSession<'a> {
    pub(super) const fn new(api: &'a mut Api) -> Self {
        Self(api)
    }
}

impl Deref for ScopedSession<'_> {
    type Target = Api;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl DerefMut for ScopedSession<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.0
    }
}

impl Drop for ScopedSession<'_> {
    fn drop(&mut self) {
        self.0.close();
    }
}
