use retrodesk_core::config::SectionCopy;
use retrodesk_core::content::ContentMode;
use yew::prelude::*;

/// DOM id of a section inside the block for `mode`.
#[must_use]
pub fn section_dom_id(mode: ContentMode, section: &str) -> String {
    format!("{}-{section}", mode.as_str())
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub content: ContentMode,
    pub sections: Vec<SectionCopy>,
}

/// Both content versions; only the block for the current mode is shown.
#[function_component(ContentBlocks)]
pub fn content_blocks(p: &Props) -> Html {
    let blocks = ContentMode::ALL.into_iter().map(|mode| {
        let active = mode == p.content;
        let sections = p.sections.iter().map(|section| {
            let paragraphs = match mode {
                ContentMode::Standard => &section.standard,
                ContentMode::EasyRead => &section.easy_read,
            };
            html! {
                <section
                    id={section_dom_id(mode, &section.id)}
                    class="content-section"
                    data-section={section.id.clone()}
                >
                    <h2>{ section.title.clone() }</h2>
                    { for paragraphs.iter().map(|text| html! { <p>{ text.clone() }</p> }) }
                </section>
            }
        });
        html! {
            <div
                class={classes!("content-version", mode.block_class(), active.then_some("active"))}
                data-content={mode.as_str()}
                hidden={!active}
                aria-hidden={(!active).to_string()}
            >
                { for sections }
            </div>
        }
    });
    html! { <>{ for blocks }</> }
}
