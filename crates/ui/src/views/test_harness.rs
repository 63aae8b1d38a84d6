use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use goclass_core::model::{Roster, SessionBook, SessionDate};
use goclass_core::time::fixed_now;
use services::{ClassroomService, Clock, RosterService, SessionService};
use storage::repository::{InMemoryRepository, LocalStore};

use crate::context::{UiApp, build_app_context};
use crate::views::ClassroomView;
use crate::views::classroom::ClassroomTestHandles;
use crate::vm::ClassroomIntent;

#[derive(Clone)]
struct TestApp {
    today: SessionDate,
    classroom: Arc<ClassroomService>,
}

impl UiApp for TestApp {
    fn today(&self) -> SessionDate {
        self.today
    }

    fn classroom(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classroom)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: ClassroomTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { ClassroomView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub classroom: Arc<ClassroomService>,
    handles: ClassroomTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until spawned mutations and the resource reload they trigger have run.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub async fn dispatch(&mut self, intent: ClassroomIntent) {
        self.dispatch_unsettled(intent);
        self.settle().await;
    }

    /// Fire an intent and render once, leaving spawned work pending.
    pub fn dispatch_unsettled(&mut self, intent: ClassroomIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn harness_date() -> SessionDate {
    SessionDate::from_ymd(2026, 1, 1).expect("valid date")
}

pub async fn setup_view_harness(roster: Roster, book: SessionBook) -> ViewHarness {
    setup_view_harness_with_store(InMemoryRepository::new(), roster, book).await
}

pub async fn setup_view_harness_with_store<T>(store: T, roster: Roster, book: SessionBook) -> ViewHarness
where
    T: LocalStore + Clone + 'static,
{
    let clock = Clock::fixed(fixed_now());
    let roster = Arc::new(RosterService::new(clock, Arc::new(store.clone()), roster));
    let sessions = Arc::new(SessionService::new(Arc::new(store), book));
    let classroom = Arc::new(ClassroomService::new(roster, sessions));
    let handles = ClassroomTestHandles::default();

    let app = Arc::new(TestApp {
        today: harness_date(),
        classroom: Arc::clone(&classroom),
    });

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        classroom,
        handles,
    };
    harness.rebuild();
    harness.settle().await;
    harness
}
