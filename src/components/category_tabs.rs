use yew::prelude::*;

use crate::category::Category;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub current: Category,
    pub on_select: Callback<Category>,
}

#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    html! {
        <div class="category-tabs">
            {
                Category::ALL.iter().map(|&category| {
                    let active = props.current == category;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(category))
                    };
                    html! {
                        <button
                            key={category.slug()}
                            class={classes!("category-tab", active.then(|| "active"))}
                            onclick={onclick}
                        >
                            <span class="category-tab__name">
                                <span class="category-tab__glyph">{category.glyph()}</span>
                                {category.label()}
                            </span>
                            <span class="category-tab__chevron">{"›"}</span>
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
