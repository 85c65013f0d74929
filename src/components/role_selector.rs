//! Buyer / seller toggle shown above the auth forms.

use leptos::prelude::*;

use crate::net::types::AccountKind;

#[component]
pub fn RoleSelector(#[prop(into)] kind: Signal<AccountKind>, on_select: Callback<AccountKind>) -> impl IntoView {
    let option = move |choice: AccountKind| {
        view! {
            <button
                type="button"
                class="role-selector__option"
                class:role-selector__option--active=move || kind.get() == choice
                on:click=move |_| on_select.run(choice)
            >
                {choice.label()}
            </button>
        }
    };

    view! {
        <div class="role-selector" role="group">
            {option(AccountKind::User)}
            {option(AccountKind::Seller)}
        </div>
    }
}
