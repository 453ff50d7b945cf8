//! Resources view: lists the study resources of the selected group.

use crate::api;
use crate::components::category_select::CategorySelect;
use common::model::category::Category;
use common::model::resource::Resource;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

pub enum Msg {
    SetCategory(Category),
    Loaded(Category, Vec<Resource>),
    Failed(String),
}

pub struct ResourcesView {
    category: Category,
    resources: Vec<Resource>,
    error: Option<String>,
}

impl ResourcesView {
    fn load(ctx: &Context<Self>, category: Category) {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_resources(Some(category)).await {
                Ok(resources) => link.send_message(Msg::Loaded(category, resources)),
                Err(e) => link.send_message(Msg::Failed(e)),
            }
        });
    }
}

impl Component for ResourcesView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let category = Category::default();
        Self::load(ctx, category);
        Self {
            category,
            resources: Vec::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetCategory(category) => {
                self.category = category;
                Self::load(ctx, category);
                true
            }
            // Responses for a group that is no longer selected are dropped.
            Msg::Loaded(category, resources) => {
                if category != self.category {
                    return false;
                }
                self.resources = resources;
                self.error = None;
                true
            }
            Msg::Failed(e) => {
                error!(format!("Loading resources failed: {}", e));
                self.error = Some(e);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="resources">
                <h2>{ "Study Resources" }</h2>
                <CategorySelect
                    selected={self.category}
                    on_change={ctx.link().callback(Msg::SetCategory)}
                />
                if let Some(e) = &self.error {
                    <div class="error">{ e }</div>
                }
                { for self.resources.iter().map(|r| html! {
                    <article key={r.id} class="resource">
                        <h3>{ &r.title }</h3>
                        <a href={r.download_href()} target="_blank">{ "Download PDF" }</a>
                        <p class="caption">{ format!("Group: {}", r.category) }</p>
                    </article>
                }) }
            </section>
        }
    }
}
