//! Quizzes view: single-choice questions of the selected group with a live score.
//!
//! Selections are kept in a map from question id to the chosen option text
//! and the score is recomputed from that map with `common::scoring::score`.
//! Each question's radio buttons get a group name assigned when the question
//! list is loaded, stored in `radio_groups` by question id.

use crate::api;
use crate::components::category_select::CategorySelect;
use common::model::category::Category;
use common::model::quiz::QuizQuestion;
use common::scoring::score;
use gloo_console::error;
use std::collections::HashMap;
use yew::platform::spawn_local;
use yew::prelude::*;

pub enum Msg {
    SetCategory(Category),
    Loaded(Category, Vec<QuizQuestion>),
    Failed(String),
    Select { quiz_id: i64, option: String },
}

pub struct QuizzesView {
    category: Category,
    questions: Vec<QuizQuestion>,
    selections: HashMap<i64, String>,
    radio_groups: HashMap<i64, AttrValue>,
    error: Option<String>,
}

impl QuizzesView {
    fn load(ctx: &Context<Self>, category: Category) {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_quizzes(Some(category)).await {
                Ok(questions) => link.send_message(Msg::Loaded(category, questions)),
                Err(e) => link.send_message(Msg::Failed(e)),
            }
        });
    }

    fn set_questions(&mut self, questions: Vec<QuizQuestion>) {
        self.radio_groups = questions
            .iter()
            .enumerate()
            .map(|(position, q)| (q.id, AttrValue::from(format!("quiz-choice-{}", position))))
            .collect();
        self.selections
            .retain(|id, _| questions.iter().any(|q| q.id == *id));
        self.questions = questions;
    }

    fn view_question(&self, ctx: &Context<Self>, question: &QuizQuestion) -> Html {
        let group = self
            .radio_groups
            .get(&question.id)
            .cloned()
            .unwrap_or_default();
        let selected = self.selections.get(&question.id);

        html! {
            <fieldset key={question.id} class="quiz-question">
                <legend><strong>{ &question.question }</strong></legend>
                <p>{ "Select answer:" }</p>
                { for question.options.iter().map(|option| {
                    let quiz_id = question.id;
                    let value = option.clone();
                    let onchange = ctx.link().callback(move |_: Event| Msg::Select {
                        quiz_id,
                        option: value.clone(),
                    });
                    html! {
                        <label class="quiz-option">
                            <input
                                type="radio"
                                name={group.clone()}
                                checked={selected == Some(option)}
                                {onchange}
                            />
                            { option }
                        </label>
                    }
                }) }
            </fieldset>
        }
    }
}

impl Component for QuizzesView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let category = Category::default();
        Self::load(ctx, category);
        Self {
            category,
            questions: Vec::new(),
            selections: HashMap::new(),
            radio_groups: HashMap::new(),
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
            Msg::Loaded(category, questions) => {
                if category != self.category {
                    return false;
                }
                self.set_questions(questions);
                self.error = None;
                true
            }
            Msg::Failed(e) => {
                error!(format!("Loading quizzes failed: {}", e));
                self.error = Some(e);
                true
            }
            Msg::Select { quiz_id, option } => {
                self.selections.insert(quiz_id, option);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let result = score(&self.questions, &self.selections);

        html! {
            <section class="quizzes">
                <h2>{ "Practice Quizzes" }</h2>
                <CategorySelect
                    selected={self.category}
                    on_change={ctx.link().callback(Msg::SetCategory)}
                />
                if let Some(e) = &self.error {
                    <div class="error">{ e }</div>
                }
                { for self.questions.iter().map(|q| self.view_question(ctx, q)) }
                <div class="success">{ format!("Your Score: {}", result) }</div>
            </section>
        }
    }
}
