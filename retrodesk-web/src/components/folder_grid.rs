use crate::components::roving::use_roving_focus;
use retrodesk_core::config::FolderLink;
use retrodesk_core::nav::Orientation;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub folders: Vec<FolderLink>,
}

/// Desktop folders; arrow keys move between them, Home/End jump to the ends.
#[function_component(FolderGrid)]
pub fn folder_grid(p: &Props) -> Html {
    let roving = use_roving_focus(p.folders.len(), Orientation::Vertical);

    let folders = p.folders.iter().enumerate().map(|(idx, folder)| {
        let described_by = format!("folder-desc-{idx}");
        html! {
            <li class="folder-item">
                <a
                    class="folder"
                    href={folder.href.clone()}
                    ref={roving.node_ref(idx)}
                    tabindex={roving.tabindex(idx).to_string()}
                    aria-describedby={described_by.clone()}
                    onfocus={roving.onfocus(idx)}
                    onkeydown={roving.onkeydown(idx)}
                >
                    <span class="folder__icon" aria-hidden="true"></span>
                    <span class="folder__label">{ folder.label.clone() }</span>
                </a>
                <span id={described_by} class="sr-only">{ folder.description.clone() }</span>
            </li>
        }
    });

    html! {
        <nav class="folder-grid" aria-label="Desktop folders">
            <ul role="list">{ for folders }</ul>
        </nav>
    }
}
