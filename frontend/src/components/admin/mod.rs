//! Admin view: password gate plus the forms that add and delete resources
//! and quiz questions.
//!
//! The `Component` implementation delegates to `update::update` and
//! `view::view`. On creation it asks the backend whether the current session
//! is already authenticated.

use crate::api;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminView;

impl Component for AdminView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_auth_status().await {
                Ok(status) => link.send_message(Msg::StatusLoaded(status.authenticated)),
                Err(e) => link.send_message_batch(vec![
                    Msg::StatusLoaded(false),
                    Msg::RequestFailed(e),
                ]),
            }
        });
        AdminView::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
