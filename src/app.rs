//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{RequireAuth, RequireRole};
use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::pages::{
    application::ApplicationPage,
    applications::{AllApplicationsPage, JobApplicationsPage},
    apply_job::ApplyJobPage,
    jobs::JobsPage,
    login::LoginPage,
    post_job::PostJobPage,
    signup::SignupPage,
};
use crate::state::session::{Session, platform_session};

/// Root application component.
///
/// Builds the one `Session` for this page load, provides it to every route,
/// and starts resolving any stored token before the first guard renders.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let session = platform_session(&config);
    provide_context::<Session>(session.clone());
    leptos::task::spawn_local(async move { session.bootstrap().await });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="Job Board"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/jobs"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/jobs"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("jobs")
                    view=|| view! { <RequireAuth><JobsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("jobs"), StaticSegment("post"))
                    view=|| view! { <RequireRole role=Role::HiringManager><PostJobPage/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("jobs"), ParamSegment("job_id"))
                    view=|| view! { <RequireAuth><ApplyJobPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("jobs"), ParamSegment("job_id"), StaticSegment("application"))
                    view=|| view! { <RequireAuth><ApplicationPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("jobs"), ParamSegment("job_id"), StaticSegment("applications"))
                    view=|| view! { <RequireRole role=Role::HiringManager><JobApplicationsPage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("applications")
                    view=|| view! { <RequireAuth><AllApplicationsPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
