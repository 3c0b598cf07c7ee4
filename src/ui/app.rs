//! Screen host: mounts the controller for a route, runs its requests and
//! follows the navigation it asks for.

use std::sync::Arc;

use crate::api::{execute, ApiError, Response, StudentApi};
use crate::ui::detail::DetailController;
use crate::ui::form::FormController;
use crate::ui::list::ListController;
use crate::ui::phase::Phase;
use crate::ui::route::Route;
use crate::ui::ticket::{Pending, Ticket};

/// The controller currently on screen.
#[derive(Debug)]
pub enum Screen {
    List(ListController),
    Detail(DetailController),
    Form(FormController),
}

impl Screen {
    fn for_route(route: &Route) -> Self {
        match route {
            Route::List => Screen::List(ListController::new()),
            Route::Detail(id) => Screen::Detail(DetailController::new(id.clone())),
            Route::Create => Screen::Form(FormController::create()),
            Route::Edit(id) => Screen::Form(FormController::edit(id.clone())),
        }
    }

    fn mount(&mut self) -> Option<Pending> {
        match self {
            Screen::List(list) => list.mount(),
            Screen::Detail(detail) => detail.mount(),
            Screen::Form(form) => form.mount(),
        }
    }

    fn finish(&mut self, ticket: Ticket, result: Result<Response, ApiError>) -> bool {
        match self {
            Screen::List(list) => list.finish(ticket, result),
            Screen::Detail(detail) => detail.finish(ticket, result),
            Screen::Form(form) => form.finish(ticket, result),
        }
    }

    fn take_navigation(&mut self) -> Option<Route> {
        match self {
            Screen::Form(form) => form.take_navigation(),
            Screen::List(_) | Screen::Detail(_) => None,
        }
    }

    pub fn phase(&self) -> &Phase {
        match self {
            Screen::List(list) => &list.state().phase,
            Screen::Detail(detail) => &detail.state().phase,
            Screen::Form(form) => &form.state().phase,
        }
    }
}

pub struct App<A> {
    api: Arc<A>,
    route: Route,
    screen: Screen,
    history: Vec<Route>,
}

impl<A: StudentApi> App<A> {
    /// Starts on an unmounted list screen; call [`App::navigate`] or [`App::open`].
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            route: Route::List,
            screen: Screen::List(ListController::new()),
            history: Vec::new(),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn list_mut(&mut self) -> Option<&mut ListController> {
        match &mut self.screen {
            Screen::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailController> {
        match &mut self.screen {
            Screen::Detail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            _ => None,
        }
    }

    /// Replace the current screen with a freshly mounted one for `route`.
    ///
    /// The old controller is dropped, so any response still addressed to it
    /// is ignored when delivered.
    pub fn navigate(&mut self, route: Route) -> Option<Pending> {
        tracing::debug!(from = %self.route, to = %route, "Navigating");
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        self.screen = Screen::for_route(&self.route);
        self.screen.mount()
    }

    /// Go to the previous route, or the list when there is none.
    pub fn back(&mut self) -> Option<Pending> {
        let route = self.history.pop().unwrap_or(Route::List);
        tracing::debug!(from = %self.route, to = %route, "Navigating back");
        self.route = route;
        self.screen = Screen::for_route(&self.route);
        self.screen.mount()
    }

    /// Hand a result to the active screen.
    ///
    /// Returns the next request to run when the result triggered navigation
    /// to a screen that fetches on mount.
    pub fn deliver(
        &mut self,
        ticket: Ticket,
        result: Result<Response, ApiError>,
    ) -> Option<Pending> {
        if !self.screen.finish(ticket, result) {
            return None;
        }
        let route = self.screen.take_navigation()?;
        self.navigate(route)
    }

    /// Execute `pending` and everything it leads to, one request at a time.
    pub async fn run(&mut self, pending: Option<Pending>) {
        let mut next = pending;
        while let Some(Pending { ticket, request }) = next.take() {
            let result = execute(self.api.as_ref(), request).await;
            next = self.deliver(ticket, result);
        }
    }

    /// Navigate to `route` and wait for its initial fetch.
    pub async fn open(&mut self, route: Route) {
        let pending = self.navigate(route);
        self.run(pending).await;
    }
}
