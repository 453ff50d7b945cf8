use crate::components::admin::AdminView;
use crate::components::home::HomeView;
use crate::components::quizzes::QuizzesView;
use crate::components::resources::ResourcesView;
use yew::{classes, html, Component, Context, Html};

/// The four pages reachable from the sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum View {
    #[default]
    Home,
    Resources,
    Quizzes,
    Admin,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Resources, View::Quizzes, View::Admin];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Resources => "Resources",
            View::Quizzes => "Quizzes",
            View::Admin => "Admin",
        }
    }
}

pub enum Msg {
    Navigate(View),
}

pub struct App {
    view: View,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: View::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(view) => {
                let changed = self.view != view;
                self.view = view;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = match self.view {
            View::Home => html! { <HomeView /> },
            View::Resources => html! { <ResourcesView /> },
            View::Quizzes => html! { <QuizzesView /> },
            View::Admin => html! { <AdminView /> },
        };

        html! {
            <div class="app">
                <nav class="sidebar">
                    <h3>{ "Navigate" }</h3>
                    { for View::ALL.iter().map(|view| {
                        let view = *view;
                        let active = (view == self.view).then_some("active");
                        html! {
                            <button
                                key={view.label()}
                                class={classes!("nav-item", active)}
                                onclick={ctx.link().callback(move |_| Msg::Navigate(view))}
                            >
                                { view.label() }
                            </button>
                        }
                    }) }
                </nav>
                <main class="content">
                    { page }
                </main>
            </div>
        }
    }
}
