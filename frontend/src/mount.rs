use shared::MountError;
use yew::AppHandle;

use crate::app::App;

/// Renders `App` into the element with `target_id`. Yew owns that subtree
/// from here on.
pub fn mount(target_id: &str) -> Result<AppHandle<App>, MountError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;

    let root = document
        .get_element_by_id(target_id)
        .ok_or_else(|| MountError::TargetMissing(target_id.to_string()))?;

    Ok(yew::Renderer::<App>::with_root(root).render())
}
