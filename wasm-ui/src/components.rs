//! UI components for the scaffold editor.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::{Action, MenuView};
use crate::i18n::Locale;
use zome_scaffold::{EntryDraft, FunctionDraft, ZomeDraft};

/// Locale chooser shown when no recognized `lang` parameter is set.
#[derive(Properties, PartialEq)]
pub struct LocaleSelectProps {
    pub on_select: Callback<Locale>,
}

#[function_component(LocaleSelect)]
pub fn locale_select(props: &LocaleSelectProps) -> Html {
    html! {
        <div class="locale-select">
            <h1>{ Locale::En.text("pageTitle") }</h1>
            <p class="subtitle">{ Locale::En.text("chooseLanguage") }</p>
            <div class="locale-buttons">
                { for Locale::ALL.iter().map(|locale| {
                    let locale = *locale;
                    let on_click = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(locale))
                    };
                    html! {
                        <button class="lang-button" onclick={on_click}>
                            { locale.text("langName") }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

/// One zome card: name, description, entry table, function table.
#[derive(Properties, PartialEq)]
pub struct ZomeCardProps {
    pub zome: ZomeDraft,
    pub locale: Locale,
    pub dispatch: Callback<Action>,
}

#[function_component(ZomeCard)]
pub fn zome_card(props: &ZomeCardProps) -> Html {
    let locale = props.locale;
    let zome_id = props.zome.id.clone();

    let on_name = {
        let dispatch = props.dispatch.clone();
        let id = zome_id.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(Action::SetZomeName(id.clone(), target.value()));
        })
    };

    let on_desc = {
        let dispatch = props.dispatch.clone();
        let id = zome_id.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            dispatch.emit(Action::SetZomeDesc(id.clone(), target.value()));
        })
    };

    let on_delete = {
        let dispatch = props.dispatch.clone();
        let id = zome_id.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::RemoveZome(id.clone())))
    };

    let on_add_entry = {
        let dispatch = props.dispatch.clone();
        let id = zome_id.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::AddEntry(id.clone())))
    };

    let on_add_function = {
        let dispatch = props.dispatch.clone();
        let id = zome_id;
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::AddFunction(id.clone())))
    };

    html! {
        <div class="zome">
            <div class="zome-header">
                <div class="field">
                    <label>{ locale.text("zomeNameLabel") }</label>
                    <input
                        class="zome-name"
                        value={props.zome.name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div class="field">
                    <label>{ locale.text("zomeDescLabel") }</label>
                    <textarea
                        class="zome-desc"
                        value={props.zome.description.clone()}
                        oninput={on_desc}
                        rows="2"
                    />
                </div>
                <button class="delete-zome" onclick={on_delete}>
                    { locale.text("deleteZome") }
                </button>
            </div>

            <h3>{ locale.text("entriesHeader") }</h3>
            <table class="entry-table">
                <thead>
                    <tr>
                        <th>{ locale.text("nameCol") }</th>
                        <th>{ locale.text("dataFormatCol") }</th>
                        <th>{ locale.text("sharingCol") }</th>
                        <th>{ locale.text("createCol") }</th>
                        <th>{ locale.text("readCol") }</th>
                        <th>{ locale.text("updateCol") }</th>
                        <th>{ locale.text("deleteCol") }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for props.zome.entries.iter().map(|entry| html! {
                        <EntryRow
                            key={entry.id.clone()}
                            entry={entry.clone()}
                            {locale}
                            dispatch={props.dispatch.clone()}
                        />
                    })}
                </tbody>
            </table>
            <button class="add-entry" onclick={on_add_entry}>
                { locale.text("addEntry") }
            </button>

            <h3>{ locale.text("functionsHeader") }</h3>
            <table class="function-table">
                <thead>
                    <tr>
                        <th>{ locale.text("nameCol") }</th>
                        <th>{ locale.text("callingTypeCol") }</th>
                        <th>{ locale.text("exposureCol") }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for props.zome.functions.iter().map(|func| html! {
                        <FunctionRow
                            key={func.id.clone()}
                            func={func.clone()}
                            {locale}
                            dispatch={props.dispatch.clone()}
                        />
                    })}
                </tbody>
            </table>
            <button class="add-function" onclick={on_add_function}>
                { locale.text("addFunction") }
            </button>
        </div>
    }
}

/// One entry row in a zome's entry table.
#[derive(Properties, PartialEq)]
pub struct EntryRowProps {
    pub entry: EntryDraft,
    pub locale: Locale,
    pub dispatch: Callback<Action>,
}

#[function_component(EntryRow)]
pub fn entry_row(props: &EntryRowProps) -> Html {
    let entry_id = props.entry.id.clone();

    let on_name = {
        let dispatch = props.dispatch.clone();
        let id = entry_id.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(Action::SetEntryName(id.clone(), target.value()));
        })
    };

    let on_format = {
        let dispatch = props.dispatch.clone();
        let id = entry_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(Action::SetEntryFormat(id.clone(), target.value()));
        })
    };

    let on_sharing = {
        let dispatch = props.dispatch.clone();
        let id = entry_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(Action::SetEntrySharing(id.clone(), target.value()));
        })
    };

    // One checkbox handler per CRUD flag.
    let flag_handler = |make: fn(String, bool) -> Action| {
        let dispatch = props.dispatch.clone();
        let id = entry_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(make(id.clone(), target.checked()));
        })
    };
    let on_create = flag_handler(Action::SetEntryCreate);
    let on_read = flag_handler(Action::SetEntryRead);
    let on_update = flag_handler(Action::SetEntryUpdate);
    let on_delete_flag = flag_handler(Action::SetEntryDelete);

    let on_delete = {
        let dispatch = props.dispatch.clone();
        let id = entry_id;
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::RemoveEntry(id.clone())))
    };

    html! {
        <tr class="entry-row">
            <td>
                <input
                    class="entry-name"
                    value={props.entry.name.clone()}
                    oninput={on_name}
                />
            </td>
            <td>
                <select class="entry-format" onchange={on_format}>
                    <option value="json" selected={props.entry.data_format == "json"}>{ "json" }</option>
                    <option value="string" selected={props.entry.data_format == "string"}>{ "string" }</option>
                </select>
            </td>
            <td>
                <select class="entry-sharing" onchange={on_sharing}>
                    <option value="public" selected={props.entry.sharing == "public"}>{ "public" }</option>
                    <option value="private" selected={props.entry.sharing == "private"}>{ "private" }</option>
                </select>
            </td>
            <td><input type="checkbox" checked={props.entry.crud.create} onchange={on_create} /></td>
            <td><input type="checkbox" checked={props.entry.crud.read} onchange={on_read} /></td>
            <td><input type="checkbox" checked={props.entry.crud.update} onchange={on_update} /></td>
            <td><input type="checkbox" checked={props.entry.crud.delete} onchange={on_delete_flag} /></td>
            <td>
                <button class="delete-entry" onclick={on_delete}>
                    { props.locale.text("delete") }
                </button>
            </td>
        </tr>
    }
}

/// One manually authored function row.
#[derive(Properties, PartialEq)]
pub struct FunctionRowProps {
    pub func: FunctionDraft,
    pub locale: Locale,
    pub dispatch: Callback<Action>,
}

#[function_component(FunctionRow)]
pub fn function_row(props: &FunctionRowProps) -> Html {
    let func_id = props.func.id.clone();

    let on_name = {
        let dispatch = props.dispatch.clone();
        let id = func_id.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(Action::SetFunctionName(id.clone(), target.value()));
        })
    };

    let on_calling_type = {
        let dispatch = props.dispatch.clone();
        let id = func_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(Action::SetFunctionCallingType(id.clone(), target.value()));
        })
    };

    let on_exposure = {
        let dispatch = props.dispatch.clone();
        let id = func_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(Action::SetFunctionExposure(id.clone(), target.value()));
        })
    };

    let on_delete = {
        let dispatch = props.dispatch.clone();
        let id = func_id;
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::RemoveFunction(id.clone())))
    };

    html! {
        <tr class="function-row">
            <td>
                <input
                    class="function-name"
                    value={props.func.name.clone()}
                    oninput={on_name}
                />
            </td>
            <td>
                <select class="function-calling-type" onchange={on_calling_type}>
                    <option value="json" selected={props.func.calling_type == "json"}>{ "json" }</option>
                    <option value="string" selected={props.func.calling_type == "string"}>{ "string" }</option>
                </select>
            </td>
            <td>
                <select class="function-exposure" onchange={on_exposure}>
                    <option value="public" selected={props.func.exposure == "public"}>{ "public" }</option>
                    <option value="private" selected={props.func.exposure == "private"}>{ "private" }</option>
                </select>
            </td>
            <td>
                <button class="delete-function" onclick={on_delete}>
                    { props.locale.text("delete") }
                </button>
            </td>
        </tr>
    }
}

/// The YAML side panel.
#[derive(Properties, PartialEq)]
pub struct YamlPanelProps {
    pub text: String,
    pub hidden: bool,
    pub locale: Locale,
    pub on_toggle: Callback<()>,
}

#[function_component(YamlPanel)]
pub fn yaml_panel(props: &YamlPanelProps) -> Html {
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <aside class={classes!("yaml-panel", props.hidden.then_some("hidden"))}>
            <div class="panel-header">
                <h2>{ props.locale.text("yamlHeader") }</h2>
                <button class="toggle-yaml" onclick={on_toggle}>
                    { props.locale.text("toggleYaml") }
                </button>
            </div>
            if !props.hidden {
                <pre class="yaml-display">{ &props.text }</pre>
            }
        </aside>
    }
}

/// Pop-up menu: main entries, language submenu, about panel.
#[derive(Properties, PartialEq)]
pub struct MenuOverlayProps {
    pub view: MenuView,
    pub locale: Locale,
    pub version: &'static str,
    pub url: &'static str,
    pub on_view: Callback<MenuView>,
    pub on_select_locale: Callback<Locale>,
}

#[function_component(MenuOverlay)]
pub fn menu_overlay(props: &MenuOverlayProps) -> Html {
    let locale = props.locale;

    let on_dismiss = {
        let on_view = props.on_view.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(MenuView::Closed))
    };

    let show = |view: MenuView| {
        let on_view = props.on_view.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_view.emit(view);
        })
    };

    let content = match props.view {
        MenuView::Closed => html! {},
        MenuView::Main => html! {
            <>
                <button class="menu-item" onclick={show(MenuView::Languages)}>
                    { locale.text("languages") }
                </button>
                <button class="menu-item" onclick={show(MenuView::About)}>
                    { locale.text("about") }
                </button>
            </>
        },
        MenuView::Languages => html! {
            <>
                { for Locale::ALL.iter().map(|item| {
                    let item = *item;
                    let on_click = {
                        let on_select = props.on_select_locale.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            on_select.emit(item);
                        })
                    };
                    html! {
                        <button class="lang-button" onclick={on_click}>
                            { item.text("langName") }
                        </button>
                    }
                })}
            </>
        },
        MenuView::About => html! {
            <div class="about">
                <p>{ locale.text("aboutText") }</p>
                <p>
                    <a href={props.url} target="_blank">{ props.url }</a>
                </p>
                <p class="version">{ format!("v{}", props.version) }</p>
            </div>
        },
    };

    html! {
        <div class="menu-overlay" onclick={on_dismiss}>
            <div
                class="menu-container"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                { content }
            </div>
        </div>
    }
}
