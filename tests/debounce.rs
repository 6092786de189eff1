use chart_order_engine::application::OrderSyncGateway;
use chart_order_engine::domain::chart::MarkerKind;
use chart_order_engine::domain::order::OrderRequest;
use chart_order_engine::domain::order::NullNotifier;
use chart_order_engine::infrastructure::{FnTransport, RecordingNotifier, RecordingTransport};
use chart_order_engine::{EntryKind, OrderContext, Price, Side, TradeId};
use std::cell::RefCell;
use std::rc::Rc;

type SentLog = Rc<RefCell<Vec<(TradeId, OrderRequest)>>>;
type ToastLog = Rc<RefCell<Vec<(String, String)>>>;

fn gateway() -> (OrderSyncGateway, SentLog, ToastLog) {
    let transport = RecordingTransport::new();
    let notifier = RecordingNotifier::new();
    let sent = transport.log();
    let toasts = notifier.messages();
    let gateway = OrderSyncGateway::new(
        TradeId::from("trade-1"),
        500,
        Box::new(transport),
        Box::new(notifier),
    );
    (gateway, sent, toasts)
}

fn live_long_ctx() -> OrderContext {
    OrderContext {
        side: Side::Long,
        entry_kind: EntryKind::Limit,
        triggered: false,
        entry_price: Price::from(100.0),
        stop_loss_premium: Price::from(95.0),
        take_profit_premium: Price::from(110.0),
        stop_loss_points: 5.0,
        take_profit_points: 10.0,
    }
}

#[test]
fn a_burst_of_commits_sends_one_request_with_the_last_price() {
    let (mut gateway, sent, _) = gateway();
    let ctx = live_long_ctx();

    assert!(gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0));
    assert!(gateway.queue_commit(MarkerKind::StopLoss, Price::from(97.0), 100));
    assert!(gateway.queue_commit(MarkerKind::StopLoss, Price::from(98.0), 200));
    assert_eq!(gateway.pending_count(), 1);

    let outcomes = gateway.poll(1_000, &ctx);

    assert_eq!(outcomes.len(), 1);
    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    match &sent[0].1 {
        OrderRequest::PriceUpdate(body) => {
            assert!((body.stop_loss_premium - 98.0).abs() < f64::EPSILON)
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn a_newer_commit_restarts_the_deadline() {
    let (mut gateway, sent, _) = gateway();
    let ctx = live_long_ctx();

    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0);
    gateway.queue_commit(MarkerKind::StopLoss, Price::from(97.0), 400);

    // 500ms past the first commit but only 200ms past the second
    assert!(gateway.poll(600, &ctx).is_empty());
    assert!(sent.borrow().is_empty());

    assert_eq!(gateway.poll(900, &ctx).len(), 1);
    assert_eq!(sent.borrow().len(), 1);
}

#[test]
fn slots_fire_exactly_at_the_deadline() {
    let (mut gateway, _, _) = gateway();
    let ctx = live_long_ctx();

    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 100);

    assert!(gateway.poll(599, &ctx).is_empty());
    assert_eq!(gateway.poll(600, &ctx).len(), 1);
    assert_eq!(gateway.pending_count(), 0);
}

#[test]
fn different_kinds_debounce_independently() {
    let (mut gateway, sent, _) = gateway();
    let ctx = live_long_ctx();

    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0);
    gateway.queue_commit(MarkerKind::TakeProfit, Price::from(112.0), 0);
    assert_eq!(gateway.pending_count(), 2);

    let outcomes = gateway.poll(500, &ctx);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(sent.borrow().len(), 2);
}

#[test]
fn non_finite_prices_never_enter_the_queue() {
    let (mut gateway, _, _) = gateway();

    assert!(!gateway.queue_commit(MarkerKind::StopLoss, Price::from(f64::NAN), 0));
    assert_eq!(gateway.pending_count(), 0);
}

#[test]
fn cancel_all_drops_pending_slots_silently() {
    let (mut gateway, sent, toasts) = gateway();
    let ctx = live_long_ctx();

    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0);
    gateway.cancel_all();

    assert!(gateway.poll(10_000, &ctx).is_empty());
    assert!(sent.borrow().is_empty());
    assert!(toasts.borrow().is_empty());
}

#[test]
fn retarget_drops_pending_and_addresses_the_new_trade() {
    let (mut gateway, sent, _) = gateway();
    let ctx = live_long_ctx();

    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0);
    gateway.retarget(TradeId::from("trade-2"));

    assert_eq!(gateway.pending_count(), 0);
    assert_eq!(gateway.trade_id(), &TradeId::from("trade-2"));

    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0);
    gateway.poll(500, &ctx);
    assert_eq!(sent.borrow()[0].0, TradeId::from("trade-2"));
}

#[test]
fn validation_runs_against_the_context_current_at_fire_time() {
    let (mut gateway, sent, toasts) = gateway();

    // valid for the context as it was when dragged...
    gateway.queue_commit(MarkerKind::StopLoss, Price::from(96.0), 0);

    // ...but the entry has since moved below the committed stop loss
    let mut ctx = live_long_ctx();
    ctx.entry_price = Price::from(95.0);

    let outcomes = gateway.poll(500, &ctx);

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].result.is_err());
    assert!(sent.borrow().is_empty());
    let toasts = toasts.borrow();
    assert_eq!(
        toasts.as_slice(),
        &[("error".to_string(), "SL price should be less than the limit price".to_string())]
    );
}

#[test]
fn closure_transports_plug_straight_in() {
    let sent = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&sent);
    let transport = FnTransport::new(move |_trade_id: &TradeId, _request: &OrderRequest| {
        *counter.borrow_mut() += 1;
        Ok(())
    });
    let mut gateway = OrderSyncGateway::new(
        TradeId::from("trade-1"),
        500,
        Box::new(transport),
        Box::new(NullNotifier),
    );

    gateway.queue_commit(MarkerKind::TakeProfit, Price::from(112.0), 0);
    gateway.poll(500, &live_long_ctx());

    assert_eq!(*sent.borrow(), 1);
}

#[test]
fn a_successful_flush_raises_a_success_toast() {
    let (mut gateway, _, toasts) = gateway();
    let ctx = live_long_ctx();

    gateway.queue_commit(MarkerKind::TakeProfit, Price::from(112.0), 0);
    gateway.poll(500, &ctx);

    assert_eq!(
        toasts.borrow().as_slice(),
        &[("success".to_string(), "TP price updated".to_string())]
    );
}
