//! View rendering for the admin view.
//!
//! Unauthenticated sessions only see the password form. Once the server
//! accepts the password the page shows the two creation forms followed by
//! the management lists with one delete button per record.

use super::messages::Msg;
use super::state::AdminView;
use crate::components::category_select::CategorySelect;
use crate::helpers::input_value;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &AdminView, ctx: &Context<AdminView>) -> Html {
    let link = ctx.link();

    let body = match component.authenticated {
        None => html! { <p>{ "Checking access..." }</p> },
        Some(false) => build_login(component, link),
        Some(true) => html! {
            <>
                <div class="success">{ "Welcome, Admin!" }</div>
                if let Some(e) = &component.error {
                    <div class="error">{ e }</div>
                }
                { build_resource_form(component, link) }
                { build_resource_list(component, link) }
                { build_quiz_form(component, link) }
                { build_quiz_list(component, link) }
            </>
        },
    };

    html! {
        <section class="admin">
            <h2>{ "Admin Panel" }</h2>
            { body }
        </section>
    }
}

fn build_login(component: &AdminView, link: &Scope<AdminView>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Login
    });

    html! {
        <form class="admin-login" {onsubmit}>
            <label>
                <span>{ "Enter Admin Password" }</span>
                <input
                    type="password"
                    value={component.password.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::UpdatePassword(input_value(&e)))}
                />
            </label>
            <button type="submit">{ "Login" }</button>
            if let Some(e) = &component.login_error {
                <div class="error">{ e }</div>
            }
        </form>
    }
}

fn build_resource_form(component: &AdminView, link: &Scope<AdminView>) -> Html {
    let form = &component.resource_form;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::AddResource
    });
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <form class="admin-form" {onsubmit}>
            <h3>{ "Add Resource" }</h3>
            <label>
                <span>{ "Title" }</span>
                <input
                    type="text"
                    value={form.title.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetResourceTitle(input_value(&e)))}
                />
            </label>
            <CategorySelect
                selected={form.category}
                on_change={link.callback(Msg::SetResourceCategory)}
            />
            <label>
                <span>{ "Upload PDF" }</span>
                <input type="file" accept=".pdf" ref={component.file_input_ref.clone()} {onchange} />
            </label>
            <button type="submit" disabled={component.busy}>{ "Add Resource" }</button>
        </form>
    }
}

fn build_resource_list(component: &AdminView, link: &Scope<AdminView>) -> Html {
    html! {
        <div class="admin-list">
            <h3>{ "Manage Resources" }</h3>
            <ul>
                { for component.resources.iter().map(|r| {
                    let id = r.id;
                    html! {
                        <li key={id}>
                            <span>{ format!("{} ({})", r.title, r.category) }</span>
                            <button onclick={link.callback(move |_| Msg::DeleteResource(id))}>
                                { format!("Delete {}", r.title) }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

fn build_quiz_form(component: &AdminView, link: &Scope<AdminView>) -> Html {
    let form = &component.quiz_form;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::AddQuiz
    });

    html! {
        <form class="admin-form" {onsubmit}>
            <h3>{ "Add Quiz Question" }</h3>
            <label>
                <span>{ "Question" }</span>
                <input
                    type="text"
                    value={form.question.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetQuizQuestion(input_value(&e)))}
                />
            </label>
            <label>
                <span>{ "Options (comma separated)" }</span>
                <textarea
                    value={form.options_text.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetQuizOptions(input_value(&e)))}
                />
            </label>
            <label>
                <span>{ "Correct Answer Index" }</span>
                <input
                    type="number"
                    min="0"
                    value={form.correct_index.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetQuizAnswer(input_value(&e)))}
                />
            </label>
            <CategorySelect
                selected={form.category}
                on_change={link.callback(Msg::SetQuizCategory)}
            />
            <button type="submit" disabled={component.busy}>{ "Add Quiz" }</button>
        </form>
    }
}

fn build_quiz_list(component: &AdminView, link: &Scope<AdminView>) -> Html {
    html! {
        <div class="admin-list">
            <h3>{ "Manage Quizzes" }</h3>
            <ul>
                { for component.quizzes.iter().map(|q| {
                    let id = q.id;
                    html! {
                        <li key={id}>
                            <span>{ format!("{} ({})", q.question, q.category) }</span>
                            <button onclick={link.callback(move |_| Msg::DeleteQuiz(id))}>
                                { format!("Delete Quiz {}", id) }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
