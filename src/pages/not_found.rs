use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Off track"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to the paddock"}
            </Link<Route>>
        </section>
    }
}
