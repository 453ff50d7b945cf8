use common::model::category::Category;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
    pub selected: Category,
    pub on_change: Callback<Category>,
    #[prop_or(AttrValue::Static("Select Group"))]
    pub label: AttrValue,
}

/// Drop-down over the fixed set of exam groups.
pub struct CategorySelect;

impl Component for CategorySelect {
    type Message = ();
    type Properties = CategorySelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CategorySelect
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(category) = select.value().parse::<Category>() {
                on_change.emit(category);
            }
        });

        html! {
            <label class="category-select">
                <span>{ props.label.clone() }</span>
                <select {onchange}>
                    { for Category::ALL.iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={*category == props.selected}
                        >
                            { category.as_str() }
                        </option>
                    }) }
                </select>
            </label>
        }
    }
}
