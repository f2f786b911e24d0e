use coursedesk_core::ViewLifetime;
use yew::prelude::*;

/// Lifetime of the calling component. Ended when the component unmounts,
/// so requests awaited through it stop touching state afterwards.
#[hook]
pub fn use_view_lifetime() -> ViewLifetime {
    let lifetime = use_memo((), |_| ViewLifetime::new());

    {
        let lifetime = lifetime.clone();
        use_effect_with((), move |_| move || lifetime.end());
    }

    (*lifetime).clone()
}
