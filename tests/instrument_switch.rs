use chart_order_engine::domain::chart::MarkerKind;
use chart_order_engine::domain::order::{NullNotifier, OrderRequest};
use chart_order_engine::infrastructure::RecordingTransport;
use chart_order_engine::{
    Bar, ChartOrderEngine, DragState, EngineConfig, EntryKind, LinearScale, Ohlc, OrderContext,
    Price, Side, Timestamp, TradeId,
};
use std::cell::RefCell;
use std::rc::Rc;

type SentLog = Rc<RefCell<Vec<(TradeId, OrderRequest)>>>;

fn scale() -> LinearScale {
    LinearScale::new(0.0, 200.0, 200)
}

fn pending_limit_ctx(entry: f64) -> OrderContext {
    OrderContext {
        side: Side::Long,
        entry_kind: EntryKind::Limit,
        triggered: false,
        entry_price: Price::from(entry),
        stop_loss_premium: Price::from(entry - 5.0),
        take_profit_premium: Price::from(entry + 10.0),
        stop_loss_points: 5.0,
        take_profit_points: 10.0,
    }
}

fn engine() -> (ChartOrderEngine, SentLog) {
    let transport = RecordingTransport::new();
    let sent = transport.log();
    let config = EngineConfig { utc_offset_minutes: 0, ..EngineConfig::default() };
    let engine = ChartOrderEngine::new(
        config,
        TradeId::from("trade-1"),
        pending_limit_ctx(100.0),
        Box::new(transport),
        Box::new(NullNotifier),
    );
    (engine, sent)
}

fn minute_bar(time: u64, close: f64) -> Bar {
    Bar::new(Timestamp::new(time), Ohlc::flat(Price::from(close)))
}

#[test]
fn switching_resets_feed_state_and_rebuilds_markers() {
    let (mut engine, _) = engine();
    engine.set_snapshot(vec![minute_bar(0, 100.0), minute_bar(60, 101.0)]);
    engine.on_tick(Price::from(102.0), 120_000);

    engine.switch_instrument(TradeId::from("trade-2"), pending_limit_ctx(50.0));

    assert!(engine.series().is_empty());
    assert!(engine.live_bar().is_none());
    assert!(
        (engine.markers().get(MarkerKind::Limit).expect("limit").value() - 50.0).abs() < 1e-9
    );
}

#[test]
fn switching_mid_drag_discards_the_session() {
    let (mut engine, sent) = engine();
    let scale = scale();

    engine.on_pointer_move(104.0, &scale);
    engine.on_pointer_down();
    engine.on_pointer_move(108.0, &scale);
    assert_eq!(engine.drag_state(), DragState::Dragging(MarkerKind::StopLoss));

    engine.switch_instrument(TradeId::from("trade-2"), pending_limit_ctx(50.0));

    assert_eq!(engine.drag_state(), DragState::Idle);
    // the release that inevitably follows must not commit against the new trade
    engine.on_pointer_up(0);
    assert_eq!(engine.poll(10_000), 0);
    assert!(sent.borrow().is_empty());
}

#[test]
fn pending_commits_never_replay_against_the_new_trade() {
    let (mut engine, sent) = engine();
    let scale = scale();

    engine.on_pointer_move(104.0, &scale);
    engine.on_pointer_down();
    engine.on_pointer_move(108.0, &scale);
    engine.on_pointer_up(0);

    engine.switch_instrument(TradeId::from("trade-2"), pending_limit_ctx(50.0));

    assert_eq!(engine.poll(10_000), 0);
    assert!(sent.borrow().is_empty());
}

#[test]
fn commits_after_the_switch_address_the_new_trade() {
    let (mut engine, sent) = engine();
    let scale = scale();

    engine.switch_instrument(TradeId::from("trade-2"), pending_limit_ctx(100.0));

    engine.on_pointer_move(104.0, &scale);
    engine.on_pointer_down();
    engine.on_pointer_move(108.0, &scale);
    engine.on_pointer_up(0);
    assert_eq!(engine.poll(500), 1);

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, TradeId::from("trade-2"));
}
