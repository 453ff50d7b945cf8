//! Update function for the admin view.
//!
//! Form edits only mutate local state. Login, uploads, creations and
//! deletions are sent to the backend from `spawn_local` tasks which report
//! back with a follow-up message; confirmations and failures are shown as
//! toasts.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::AdminView;

/// Fetches the full resource and quiz lists for the management sections.
pub fn refresh_lists(ctx: &Context<AdminView>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_resources(None).await {
            Ok(resources) => link.send_message(Msg::ResourcesLoaded(resources)),
            Err(e) => link.send_message(Msg::RequestFailed(e)),
        }
        match api::fetch_quizzes(None).await {
            Ok(quizzes) => link.send_message(Msg::QuizzesLoaded(quizzes)),
            Err(e) => link.send_message(Msg::RequestFailed(e)),
        }
    });
}

pub fn update(component: &mut AdminView, ctx: &Context<AdminView>, msg: Msg) -> bool {
    match msg {
        Msg::StatusLoaded(authenticated) => {
            component.authenticated = Some(authenticated);
            if authenticated {
                refresh_lists(ctx);
            }
            true
        }
        Msg::UpdatePassword(password) => {
            component.password = password;
            false
        }
        Msg::Login => {
            let password = component.password.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::login(password).await {
                    Ok(status) if status.authenticated => link.send_message(Msg::LoginSucceeded),
                    Ok(_) => link.send_message(Msg::LoginFailed("Incorrect password".to_string())),
                    Err(e) => link.send_message(Msg::LoginFailed(e)),
                }
            });
            false
        }
        Msg::LoginSucceeded => {
            component.authenticated = Some(true);
            component.password.clear();
            component.login_error = None;
            show_toast("Access granted");
            refresh_lists(ctx);
            true
        }
        Msg::LoginFailed(e) => {
            component.login_error = Some(e);
            true
        }

        Msg::ResourcesLoaded(resources) => {
            component.resources = resources;
            true
        }
        Msg::QuizzesLoaded(quizzes) => {
            component.quizzes = quizzes;
            true
        }
        Msg::RequestFailed(e) => {
            error!(format!("Admin request failed: {}", e));
            component.busy = false;
            show_toast(&e);
            component.error = Some(e);
            true
        }

        Msg::SetResourceTitle(title) => {
            component.resource_form.title = title;
            false
        }
        Msg::SetResourceCategory(category) => {
            component.resource_form.category = category;
            true
        }
        Msg::FileSelected(file) => {
            component.resource_form.file = file;
            false
        }
        Msg::AddResource => {
            if component.busy {
                return false;
            }
            let Some(file) = component.resource_form.file.clone() else {
                component.error = Some("Please upload a PDF file.".to_string());
                return true;
            };
            component.busy = true;
            let title = component.resource_form.title.clone();
            let category = component.resource_form.category;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::upload_resource(&title, category, &file).await {
                    Ok(resource) => link.send_message(Msg::ResourceAdded(resource)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            true
        }
        Msg::ResourceAdded(resource) => {
            component.busy = false;
            component.error = None;
            component.resources.push(resource);
            component.resource_form.title.clear();
            component.resource_form.file = None;
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            show_toast("Resource added!");
            true
        }
        Msg::DeleteResource(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_resource(id).await {
                    Ok(()) => link.send_message(Msg::ResourceDeleted(id)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            false
        }
        Msg::ResourceDeleted(id) => {
            component.resources.retain(|r| r.id != id);
            show_toast("Deleted!");
            true
        }

        Msg::SetQuizQuestion(question) => {
            component.quiz_form.question = question;
            false
        }
        Msg::SetQuizOptions(options) => {
            component.quiz_form.options_text = options;
            false
        }
        Msg::SetQuizAnswer(answer) => {
            component.quiz_form.correct_index = answer;
            false
        }
        Msg::SetQuizCategory(category) => {
            component.quiz_form.category = category;
            true
        }
        Msg::AddQuiz => {
            if component.busy {
                return false;
            }
            let form = match component.quiz_form.to_request() {
                Ok(form) => form,
                Err(e) => {
                    component.error = Some(e);
                    return true;
                }
            };
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::add_quiz(form).await {
                    Ok(quiz) => link.send_message(Msg::QuizAdded(quiz)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            true
        }
        Msg::QuizAdded(quiz) => {
            component.busy = false;
            component.error = None;
            component.quizzes.push(quiz);
            component.quiz_form.question.clear();
            component.quiz_form.options_text.clear();
            component.quiz_form.correct_index = "0".to_string();
            show_toast("Quiz added!");
            true
        }
        Msg::DeleteQuiz(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_quiz(id).await {
                    Ok(()) => link.send_message(Msg::QuizDeleted(id)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            false
        }
        Msg::QuizDeleted(id) => {
            component.quizzes.retain(|q| q.id != id);
            show_toast("Deleted!");
            true
        }
    }
}
