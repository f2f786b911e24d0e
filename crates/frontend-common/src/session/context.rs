//! Global session context and provider

use super::storage::BrowserSessionStore;
use coursedesk_core::{SessionStore, Student, StudentId};
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContextData {
    /// Profile from the login in this page load; `None` after a reload
    pub student: Option<Student>,
    pub student_id: Option<StudentId>,
    pub is_loading: bool,
}

/// Session context actions
pub enum SessionAction {
    /// Read back whatever identifier storage holds
    Restore(Option<StudentId>),
    /// A login completed and the identifier was stored
    Login(Student),
    /// The stored identifier was removed
    Logout,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Default for SessionContextData {
    fn default() -> Self {
        Self {
            student: None,
            student_id: None,
            is_loading: true, // Start with loading to check localStorage
        }
    }
}

impl SessionContextData {
    pub fn is_logged_in(&self) -> bool {
        self.student_id.is_some()
    }

    /// Name for the header
    pub fn display_name(&self) -> Option<String> {
        match (&self.student, &self.student_id) {
            (Some(student), _) if !student.username.is_empty() => Some(student.username.clone()),
            (_, Some(id)) => Some(format!("Student {id}")),
            _ => None,
        }
    }
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Restore(student_id) => Rc::new(Self {
                student: None,
                student_id,
                is_loading: false,
            }),
            SessionAction::Login(student) => Rc::new(Self {
                student_id: Some(student.id.clone()),
                student: Some(student),
                is_loading: false,
            }),
            SessionAction::Logout => Rc::new(Self {
                student: None,
                student_id: None,
                is_loading: false,
            }),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(SessionContextData::default);

    // Load the identifier from localStorage on mount
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.dispatch(SessionAction::Restore(
                BrowserSessionStore::default().student_id(),
            ));
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        Student {
            id: StudentId::new("3"),
            username: "abc12".into(),
            profile: Default::default(),
        }
    }

    #[test]
    fn test_login_sets_identifier_and_profile() {
        let state = Rc::new(SessionContextData::default()).reduce(SessionAction::Login(student()));
        assert!(state.is_logged_in());
        assert_eq!(state.display_name().as_deref(), Some("abc12"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_logout_resets_to_anonymous() {
        let state = Rc::new(SessionContextData::default())
            .reduce(SessionAction::Login(student()))
            .reduce(SessionAction::Logout);
        assert!(!state.is_logged_in());
        assert_eq!(state.student, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_restore_without_profile_names_student_by_id() {
        let state = Rc::new(SessionContextData::default())
            .reduce(SessionAction::Restore(Some(StudentId::new("9"))));
        assert_eq!(state.display_name().as_deref(), Some("Student 9"));

        let empty = Rc::new(SessionContextData::default()).reduce(SessionAction::Restore(None));
        assert!(!empty.is_logged_in());
        assert_eq!(empty.display_name(), None);
    }
}
