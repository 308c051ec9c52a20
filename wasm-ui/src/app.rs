//! Main application component.

use gloo::storage::{LocalStorage, Storage};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, HtmlAnchorElement, HtmlInputElement, Url};
use yew::prelude::*;

use crate::components::{LocaleSelect, MenuOverlay, YamlPanel, ZomeCard};
use crate::i18n::Locale;
use zome_scaffold::{Document, Draft, parse_document, to_yaml};

/// Local storage key holding the JSON-serialized document.
pub const SAVE_KEY: &str = "zome-scaffold-save-json";

/// Fixed name of the downloaded YAML file.
const DOWNLOAD_FILE: &str = "zome-scaffold.yml";

/// Idle time before the YAML panel re-renders after a text edit.
const RENDER_DEBOUNCE_MS: u32 = 300;

/// Repository shown in the about panel.
const PROJECT_URL: &str = "https://github.com/zome-scaffold/zome-scaffold";

/// Every edit the form can emit, with its extracted parameters.
///
/// This is the registration table between the view and the model: each
/// control is wired to exactly one variant, and [`apply`] is the single
/// place edits land. Ids name draft rows, never DOM nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetAppName(String),
    SetAppDesc(String),
    AddZome,
    RemoveZome(String),
    SetZomeName(String, String),
    SetZomeDesc(String, String),
    AddEntry(String),
    RemoveEntry(String),
    SetEntryName(String, String),
    SetEntryFormat(String, String),
    SetEntrySharing(String, String),
    SetEntryCreate(String, bool),
    SetEntryRead(String, bool),
    SetEntryUpdate(String, bool),
    SetEntryDelete(String, bool),
    AddFunction(String),
    RemoveFunction(String),
    SetFunctionName(String, String),
    SetFunctionCallingType(String, String),
    SetFunctionExposure(String, String),
}

/// Apply one edit to the draft.
pub fn apply(draft: &mut Draft, action: &Action) {
    match action {
        Action::SetAppName(value) => draft.app_name = value.clone(),
        Action::SetAppDesc(value) => draft.app_desc = value.clone(),
        Action::AddZome => {
            draft.add_zome();
        }
        Action::RemoveZome(id) => draft.remove_zome(id),
        Action::SetZomeName(id, value) => draft.zome_mut(id).name = value.clone(),
        Action::SetZomeDesc(id, value) => draft.zome_mut(id).description = value.clone(),
        Action::AddEntry(zome_id) => {
            draft.add_entry(zome_id);
        }
        Action::RemoveEntry(id) => draft.remove_entry(id),
        Action::SetEntryName(id, value) => draft.entry_mut(id).name = value.clone(),
        Action::SetEntryFormat(id, value) => draft.entry_mut(id).data_format = value.clone(),
        Action::SetEntrySharing(id, value) => draft.entry_mut(id).sharing = value.clone(),
        Action::SetEntryCreate(id, on) => draft.entry_mut(id).crud.create = *on,
        Action::SetEntryRead(id, on) => draft.entry_mut(id).crud.read = *on,
        Action::SetEntryUpdate(id, on) => draft.entry_mut(id).crud.update = *on,
        Action::SetEntryDelete(id, on) => draft.entry_mut(id).crud.delete = *on,
        Action::AddFunction(zome_id) => {
            draft.add_function(zome_id);
        }
        Action::RemoveFunction(id) => draft.remove_function(id),
        Action::SetFunctionName(id, value) => draft.function_mut(id).name = value.clone(),
        Action::SetFunctionCallingType(id, value) => {
            draft.function_mut(id).calling_type = value.clone()
        }
        Action::SetFunctionExposure(id, value) => {
            draft.function_mut(id).exposure = value.clone()
        }
    }
}

/// Keystroke-rate edits debounce the YAML re-render; everything else
/// (structure, selects, checkboxes) re-renders immediately.
pub fn is_text_edit(action: &Action) -> bool {
    matches!(
        action,
        Action::SetAppName(_)
            | Action::SetAppDesc(_)
            | Action::SetZomeName(_, _)
            | Action::SetZomeDesc(_, _)
            | Action::SetEntryName(_, _)
            | Action::SetFunctionName(_, _)
    )
}

/// Which overlay the hamburger menu currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuView {
    Closed,
    Main,
    Languages,
    About,
}

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Locale requested via the `lang` query parameter, if recognized.
fn query_locale() -> Option<Locale> {
    let search = window().location().search().ok()?;
    let raw = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("lang="))?;
    let code = js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string());
    Locale::from_code(code.trim())
}

/// Switch locale with full-reload semantics: setting the query string
/// re-enters startup with the new locale fixed.
fn select_locale(locale: Locale) {
    window()
        .location()
        .set_search(&format!("lang={}", locale.code()))
        .unwrap();
}

/// Load the persisted document into a fresh draft. Absent or malformed
/// saved state silently downgrades to an empty document.
fn load_draft(locale: Locale) -> Draft {
    let mut draft = match LocalStorage::get::<Document>(SAVE_KEY) {
        Ok(doc) => Draft::load(&doc),
        Err(_) => Draft::new(locale.code()),
    };
    draft.locale = locale.code().to_string();
    draft
}

/// Project the draft, persist its JSON form, and return the annotated
/// YAML for display.
fn render_and_persist(draft: &Draft) -> String {
    let doc = draft.to_document();
    let _ = LocalStorage::set(SAVE_KEY, &doc);
    to_yaml(&doc).unwrap()
}

/// Trigger a browser download of the current annotated YAML.
fn download_yaml(draft: &Draft) {
    let yaml = render_and_persist(draft);
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(&yaml));

    let blob = Blob::new_with_str_sequence(&array).unwrap();
    let url = Url::create_object_url_with_blob(&blob).unwrap();

    let document = window().document().unwrap();
    let anchor: HtmlAnchorElement = document.create_element("a").unwrap().dyn_into().unwrap();
    anchor.set_href(&url);
    anchor.set_download(DOWNLOAD_FILE);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
}

/// Root component: locale gate.
///
/// A recognized `lang` query parameter opens the editor; anything else
/// shows the locale chooser.
#[function_component(App)]
pub fn app() -> Html {
    match query_locale() {
        Some(locale) => html! { <Editor {locale} /> },
        None => {
            let on_select = Callback::from(select_locale);
            html! { <LocaleSelect {on_select} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EditorProps {
    pub locale: Locale,
}

/// The main editing view for one fixed locale.
#[function_component(Editor)]
pub fn editor(props: &EditorProps) -> Html {
    let locale = props.locale;

    let draft = use_state(|| load_draft(locale));
    let yaml_text = use_state({
        let draft = (*draft).clone();
        move || render_and_persist(&draft)
    });
    let sidebar_hidden = use_state(|| false);
    let menu = use_state(|| MenuView::Closed);
    let pending_render = use_mut_ref(|| None::<Timeout>);

    let dispatch = {
        let draft = draft.clone();
        let yaml_text = yaml_text.clone();
        let pending_render = pending_render.clone();
        Callback::from(move |action: Action| {
            let mut new_draft = (*draft).clone();
            apply(&mut new_draft, &action);
            draft.set(new_draft.clone());

            if is_text_edit(&action) {
                let yaml_text = yaml_text.clone();
                // Replacing the pending timeout drops the old one,
                // which cancels it: a cancel-and-reschedule debounce.
                *pending_render.borrow_mut() =
                    Some(Timeout::new(RENDER_DEBOUNCE_MS, move || {
                        yaml_text.set(render_and_persist(&new_draft));
                    }));
            } else {
                *pending_render.borrow_mut() = None;
                yaml_text.set(render_and_persist(&new_draft));
            }
        })
    };

    let on_app_name = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(Action::SetAppName(target.value()));
        })
    };

    let on_app_desc = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            dispatch.emit(Action::SetAppDesc(target.value()));
        })
    };

    let on_add_zome = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::AddZome))
    };

    let on_upload = {
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    let name = file.name();
                    let reader = web_sys::FileReader::new().unwrap();
                    let reader_clone = reader.clone();

                    let read_name = name.clone();
                    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
                        if let Ok(result) = reader_clone.result() {
                            if let Some(text) = result.as_string() {
                                match parse_document(&text) {
                                    Ok(doc) => {
                                        let _ = LocalStorage::set(SAVE_KEY, &doc);
                                        let _ = window().location().reload();
                                    }
                                    Err(_) => {
                                        // Persisted state stays untouched.
                                        gloo::dialogs::alert(&format!(
                                            "Error Parsing File: {read_name}"
                                        ));
                                    }
                                }
                            }
                        }
                    })
                        as Box<dyn FnMut(_)>);

                    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
                        gloo::dialogs::alert(&format!("Error Reading File: {name}"));
                    })
                        as Box<dyn FnMut(_)>);

                    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
                    onload.forget();
                    onerror.forget();

                    let _ = reader.read_as_text(&file);
                }
            }
            // Clear the input so the same file can be loaded again
            input.set_value("");
        })
    };

    let on_download = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| download_yaml(&draft))
    };

    let on_new_document = {
        Callback::from(move |_: MouseEvent| {
            LocalStorage::delete(SAVE_KEY);
            let _ = window().location().reload();
        })
    };

    let on_toggle_yaml = {
        let sidebar_hidden = sidebar_hidden.clone();
        Callback::from(move |_: ()| sidebar_hidden.set(!*sidebar_hidden))
    };

    let on_open_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(MenuView::Main))
    };

    let on_menu_view = {
        let menu = menu.clone();
        Callback::from(move |view: MenuView| menu.set(view))
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1 class="page-title">{ locale.text("pageTitle") }</h1>
                </div>
                <div class="header-right">
                    <label class="file-button">
                        { locale.text("upload") }
                        <input type="file" accept=".json,.yml,.yaml" onchange={on_upload} />
                    </label>
                    <button class="download-button" onclick={on_download}>
                        { locale.text("downloadYaml") }
                    </button>
                    <button class="reset-button" onclick={on_new_document}>
                        { locale.text("newDocument") }
                    </button>
                    <button class="menu-button" onclick={on_open_menu}>{ "\u{2630}" }</button>
                </div>
            </header>

            <main class={classes!("main", (*sidebar_hidden).then_some("sidebar-hidden"))}>
                <div class="page">
                    <div class="field">
                        <label>{ locale.text("appNameLabel") }</label>
                        <input
                            class="app-name"
                            value={draft.app_name.clone()}
                            oninput={on_app_name}
                        />
                    </div>
                    <div class="field">
                        <label>{ locale.text("appDescLabel") }</label>
                        <textarea
                            class="app-desc"
                            value={draft.app_desc.clone()}
                            oninput={on_app_desc}
                            rows="3"
                        />
                    </div>

                    <div class="zomes">
                        { for draft.zomes.iter().map(|zome| html! {
                            <ZomeCard
                                key={zome.id.clone()}
                                zome={zome.clone()}
                                {locale}
                                dispatch={dispatch.clone()}
                            />
                        })}
                    </div>

                    <button class="add-zome" onclick={on_add_zome}>
                        { locale.text("addZome") }
                    </button>
                </div>

                <YamlPanel
                    text={(*yaml_text).clone()}
                    hidden={*sidebar_hidden}
                    {locale}
                    on_toggle={on_toggle_yaml}
                />
            </main>

            if *menu != MenuView::Closed {
                <MenuOverlay
                    view={*menu}
                    {locale}
                    version={env!("CARGO_PKG_VERSION")}
                    url={PROJECT_URL}
                    on_view={on_menu_view}
                    on_select_locale={Callback::from(select_locale)}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: drive the draft purely through dispatched actions, the
    /// way the rendered form does.
    fn apply_all(draft: &mut Draft, actions: &[Action]) {
        for action in actions {
            apply(draft, action);
        }
    }

    #[test]
    fn test_actions_build_a_document() {
        let mut draft = Draft::new("en");
        apply_all(
            &mut draft,
            &[
                Action::SetAppName("chat".to_string()),
                Action::SetAppDesc("a chat app".to_string()),
                Action::AddZome,
            ],
        );
        let zome_id = draft.zomes[0].id.clone();
        apply_all(
            &mut draft,
            &[
                Action::SetZomeName(zome_id.clone(), "rooms".to_string()),
                Action::AddEntry(zome_id.clone()),
            ],
        );
        let entry_id = draft.zomes[0].entries[0].id.clone();
        apply_all(
            &mut draft,
            &[
                Action::SetEntryName(entry_id.clone(), "message".to_string()),
                Action::SetEntryCreate(entry_id.clone(), true),
                Action::SetEntryRead(entry_id, true),
            ],
        );

        let doc = draft.to_document();
        assert_eq!(doc.name, "chat");
        assert_eq!(doc.zomes[0].name, "rooms");
        assert_eq!(doc.zomes[0].entries[0].hint.as_deref(), Some("cr"));
        assert_eq!(doc.zomes[0].functions[0].name, "messageCreate");
    }

    #[test]
    fn test_remove_only_entry_then_add_manual_function() {
        let mut draft = Draft::new("en");
        apply(&mut draft, &Action::AddZome);
        let zome_id = draft.zomes[0].id.clone();
        apply(&mut draft, &Action::AddEntry(zome_id.clone()));
        let entry_id = draft.zomes[0].entries[0].id.clone();
        apply_all(
            &mut draft,
            &[
                Action::SetEntryName(entry_id.clone(), "post".to_string()),
                Action::SetEntryDelete(entry_id.clone(), true),
                Action::RemoveEntry(entry_id),
                Action::AddFunction(zome_id),
            ],
        );
        let func_id = draft.zomes[0].functions[0].id.clone();
        apply(
            &mut draft,
            &Action::SetFunctionName(func_id, "foo".to_string()),
        );

        let doc = draft.to_document();
        assert!(doc.zomes[0].entries.is_empty());
        assert_eq!(doc.zomes[0].functions.len(), 1);
        assert_eq!(doc.zomes[0].functions[0].name, "foo");
    }

    #[test]
    fn test_text_edits_are_debounced_and_structure_is_not() {
        assert!(is_text_edit(&Action::SetAppName("x".to_string())));
        assert!(is_text_edit(&Action::SetEntryName(
            "entry-1".to_string(),
            "x".to_string()
        )));
        assert!(!is_text_edit(&Action::AddZome));
        assert!(!is_text_edit(&Action::SetEntryCreate(
            "entry-1".to_string(),
            true
        )));
        assert!(!is_text_edit(&Action::RemoveZome("zome-1".to_string())));
    }
}
