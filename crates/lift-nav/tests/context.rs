//! Navigation context, provider scope and dispatch working together.

use std::sync::{Arc, Mutex};

use lift_model::{Role, Route, Session};
use lift_nav::{
    ContextEvent, Dispatcher, NavError, NavigationProvider, Payload, Router, Screen,
    try_use_navigation, use_navigation,
};

#[derive(Debug, PartialEq)]
struct Ticket {
    number: String,
}

fn events(provider: &NavigationProvider) -> (Arc<Mutex<Vec<ContextEvent>>>, lift_nav::Subscription) {
    let log: Arc<Mutex<Vec<ContextEvent>>> = Arc::default();
    let sink = Arc::clone(&log);
    let sub = provider
        .context()
        .subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    (log, sub)
}

#[test]
fn payload_reaches_its_destination_unchanged() {
    let provider = NavigationProvider::mount(Router::new());
    let nav = provider.context();

    let ticket = Arc::new(Ticket {
        number: "T-100".into(),
    });
    nav.navigate_to("/dashboard", Some(Payload::from_arc(Arc::clone(&ticket))))
        .unwrap();

    let read = nav.payload_for::<Ticket>(Route::Dashboard).unwrap();
    assert!(Arc::ptr_eq(&read, &ticket));
    assert_eq!(read.number, "T-100");
}

#[test]
fn navigating_without_data_clears_the_payload() {
    let provider = NavigationProvider::mount(Router::new());
    let nav = provider.context();
    let (log, _sub) = events(&provider);

    nav.navigate_to("/dashboard", Some(Payload::new(7_u32))).unwrap();
    nav.navigate_to("/dashboard", None).unwrap();

    assert!(nav.payload_for::<u32>(Route::Dashboard).is_none());
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            ContextEvent::PayloadChanged(Some(Route::Dashboard)),
            ContextEvent::RouteChanged(Route::Dashboard),
            ContextEvent::PayloadChanged(None),
        ]
    );
}

#[test]
fn same_route_with_new_data_still_refreshes() {
    let provider = NavigationProvider::mount(Router::starting_at(Route::TicketDetails));
    let nav = provider.context();
    let (log, _sub) = events(&provider);
    let before = nav.revision();

    nav.navigate_route(Route::TicketDetails, Some(Payload::new(2_u8)));

    assert_eq!(
        *log.lock().unwrap(),
        vec![ContextEvent::PayloadChanged(Some(Route::TicketDetails))]
    );
    assert!(nav.revision() > before);
    assert_eq!(nav.current_payload::<u8>().as_deref(), Some(&2));
}

#[test]
fn invalid_path_is_rejected() {
    let provider = NavigationProvider::mount(Router::new());
    let nav = provider.context();

    let err = nav.navigate_to("/Dashboard", None).unwrap_err();
    assert!(matches!(err, NavError::InvalidRoute { ref path, .. } if path == "/Dashboard"));
    assert_eq!(nav.route(), Route::Login);
}

#[test]
fn mount_and_unmount_balance_listeners() {
    let router = Router::new();
    let provider = NavigationProvider::mount(router.clone());
    assert_eq!(router.listener_count(), 1);
    assert!(try_use_navigation().is_ok());

    provider.unmount();
    assert_eq!(router.listener_count(), 0);
    assert_eq!(try_use_navigation().unwrap_err(), NavError::OutsideProvider);

    router.navigate(Route::Complaints);
    assert_eq!(router.current_route(), Route::Complaints);
}

#[test]
fn mount_synchronizes_with_router() {
    let router = Router::starting_at(Route::Invoice);
    let provider = NavigationProvider::mount(router.clone());
    assert_eq!(provider.context().route(), Route::Invoice);
    assert!(provider.context().revision() > 0);
}

#[test]
#[should_panic(expected = "outside of a NavigationProvider")]
fn use_navigation_outside_provider_panics() {
    let _ = use_navigation();
}

#[test]
fn sub_customer_is_kept_away_from_create_user() {
    let provider = NavigationProvider::mount(Router::new());
    let nav = use_navigation();
    nav.set_user(Some(Session::new("12", "Wing B", Role::SubCustomer)));

    nav.navigate_to("create-user", None).unwrap();

    let dispatcher = Dispatcher::default();
    let session = nav.session();
    assert_eq!(nav.route(), Route::CreateUser);
    assert_eq!(
        dispatcher.select(nav.route(), session.as_ref()),
        Screen::Dashboard
    );
    drop(provider);
}

#[test]
fn logout_returns_to_login() {
    let provider = NavigationProvider::mount(Router::new());
    let nav = provider.context();
    nav.set_user(Some(Session::new("1", "Owner", Role::Customer)));
    nav.navigate_route(Route::Complaints, None);
    let (log, _sub) = events(&provider);

    nav.logout();

    assert_eq!(nav.route(), Route::Login);
    assert!(nav.session().is_none());
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            ContextEvent::SessionChanged,
            ContextEvent::RouteChanged(Route::Login)
        ]
    );
    assert_eq!(
        Dispatcher::default().select(nav.route(), None),
        Screen::Login
    );
}
