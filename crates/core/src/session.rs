//! Session store: where the logged-in student's identifier lives between
//! page views or CLI invocations.

use crate::error::CoreResult;
use crate::types::StudentId;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Single-writer holder of the current student identifier.
///
/// The identifier is correlation data, not a credential: no expiry and no
/// encryption.
pub trait SessionStore {
    /// Last stored identifier, if any
    fn student_id(&self) -> Option<StudentId>;

    /// Persist the identifier under the store's fixed key
    fn set_student_id(&self, id: &StudentId) -> CoreResult<()>;

    /// Forget the identifier
    fn clear(&self) -> CoreResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn student_id(&self) -> Option<StudentId> {
        (**self).student_id()
    }

    fn set_student_id(&self, id: &StudentId) -> CoreResult<()> {
        (**self).set_student_id(id)
    }

    fn clear(&self) -> CoreResult<()> {
        (**self).clear()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn student_id(&self) -> Option<StudentId> {
        (**self).student_id()
    }

    fn set_student_id(&self, id: &StudentId) -> CoreResult<()> {
        (**self).set_student_id(id)
    }

    fn clear(&self) -> CoreResult<()> {
        (**self).clear()
    }
}

/// In-process store. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: Mutex<Option<StudentId>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_student(id: StudentId) -> Self {
        Self {
            current: Mutex::new(Some(id)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn student_id(&self) -> Option<StudentId> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_student_id(&self, id: &StudentId) -> CoreResult<()> {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(id.clone());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}
