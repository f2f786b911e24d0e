//! Bridges core view state into Yew reducers

use coursedesk_core::Reduce;
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// View state held by `use_reducer_eq`. Wraps a core [`Reduce`] value so the
/// page can dispatch core actions directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState<T>(pub T);

impl<T: Reduce> Reducible for ViewState<T> {
    type Action = T::Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.reduce(action)))
    }
}

impl<T> Deref for ViewState<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

pub type ViewStateHandle<T> = UseReducerHandle<ViewState<T>>;

/// Hook to hold view state, re-rendering only when it changes
#[hook]
pub fn use_view_state<T, F>(init: F) -> ViewStateHandle<T>
where
    T: Reduce + PartialEq + 'static,
    F: FnOnce() -> T,
{
    use_reducer_eq(move || ViewState(init()))
}
