//! Home view: welcome text, feature list and a quote drawn by the server.
//!
//! The content is fetched every time the view is mounted, so navigating back
//! to Home shows a freshly drawn quote.

use crate::api;
use common::home::HomeContent;
use gloo_console::error;
use pulldown_cmark::{html, Parser};
use yew::platform::spawn_local;
use yew::prelude::*;

pub enum Msg {
    Loaded(HomeContent),
    Failed(String),
}

pub struct HomeView {
    content: Option<HomeContent>,
    error: Option<String>,
}

fn markdown_to_html(markdown: &str) -> Html {
    let mut html_output = String::new();
    html::push_html(&mut html_output, Parser::new(markdown));
    Html::from_html_unchecked(AttrValue::from(html_output))
}

impl Component for HomeView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_home().await {
                Ok(content) => link.send_message(Msg::Loaded(content)),
                Err(e) => link.send_message(Msg::Failed(e)),
            }
        });
        Self {
            content: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(content) => {
                self.content = Some(content);
                self.error = None;
            }
            Msg::Failed(e) => {
                error!(format!("Loading home content failed: {}", e));
                self.error = Some(e);
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match (&self.content, &self.error) {
            (Some(content), _) => html! {
                <section class="home">
                    <h1 class="home-title">{ &content.title }</h1>
                    <p>{ &content.welcome }</p>
                    <div class="info">{ &content.quote }</div>
                    <h2>{ "What You\u{2019}ll Find Here" }</h2>
                    <div class="features">{ markdown_to_html(&content.features_markdown) }</div>
                    <div class="success">{ &content.tip }</div>
                </section>
            },
            (None, Some(e)) => html! { <div class="error">{ e }</div> },
            (None, None) => html! { <p>{ "Loading\u{2026}" }</p> },
        }
    }
}
