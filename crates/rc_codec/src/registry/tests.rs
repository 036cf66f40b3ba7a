use core::any::TypeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rc_codec_derive::Codable;
use serde_json::json;
use uuid::Uuid;

use crate::descriptor::tests::{BareList, NoAbsence, ThreeWay};
use crate::format::TimeOfDay;
use crate::info::Typed;
use crate::{CodecError, CodecRegistry, ErrorKind, SchemaError, ShapeError, TreeShape};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Codable, Debug, PartialEq)]
struct Person {
    id: Uuid,
    name: String,
    age: u32,
    email: Option<String>,
    tags: Vec<String>,
    scores: BTreeMap<String, f64>,
    friends: Vec<Person>,
}

fn alice() -> Person {
    Person {
        id: Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8),
        name: "Alice".into(),
        age: 31,
        email: Some("alice@example.com".into()),
        tags: vec!["admin".into()],
        scores: BTreeMap::from([("math".into(), 1.5)]),
        friends: vec![Person {
            id: Uuid::nil(),
            name: "Bob".into(),
            age: 29,
            email: None,
            tags: Vec::new(),
            scores: BTreeMap::new(),
            friends: Vec::new(),
        }],
    }
}

#[derive(Codable, Debug, PartialEq)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

#[derive(Codable, Debug, PartialEq)]
struct Tree {
    label: String,
    children: Vec<Tree>,
}

#[derive(Codable, Debug, PartialEq)]
struct Parent {
    name: String,
    child: Option<Box<Child>>,
}

#[derive(Codable, Debug, PartialEq)]
struct Child {
    name: String,
    parent: Option<Box<Parent>>,
}

#[derive(Codable, Debug, PartialEq, Clone, Copy)]
enum Level {
    #[codec(value = "lo")]
    Low,
    #[codec(value = "hi")]
    High,
}

#[derive(Codable, Debug, PartialEq)]
enum Priority {
    Minor = 1,
    Major = 2,
}

#[derive(Codable, Debug, PartialEq)]
struct Alarm {
    level: Level,
    priority: Priority,
    #[codec(rename = "fired-at")]
    fired_at: DateTime<Utc>,
}

#[derive(Codable, Debug, PartialEq)]
struct Tally {
    by_id: HashMap<u32, String>,
    flags: BTreeMap<bool, i64>,
}

#[derive(Codable)]
struct Choice {
    choice: ThreeWay,
}

#[derive(Codable)]
struct Strict {
    value: NoAbsence,
}

#[derive(Codable)]
struct Bare {
    items: Option<BareList>,
}

#[derive(Codable)]
struct Outer {
    inner: Vec<Choice>,
}

#[derive(Codable, Debug, PartialEq)]
#[codec(auto_register)]
struct Registered {
    tick: u64,
}

#[derive(Codable, Debug, PartialEq)]
struct Ledger {
    id: Uuid,
    amount: BigDecimal,
    booked_on: NaiveDate,
    cutoff: NaiveTime,
    entered: NaiveDateTime,
    settled: DateTime<Utc>,
    local: DateTime<FixedOffset>,
    reminder: TimeOfDay,
    labels: BTreeSet<String>,
    accounts: HashSet<u32>,
}

fn ledger_tree() -> serde_json::Value {
    json!({
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "amount": "12.50",
        "booked_on": "2021-04-23",
        "cutoff": "17:30:00",
        "entered": "2021-04-23T09:05:16.157",
        "settled": "2021-04-24T00:00:00Z",
        "local": "2021-04-23T09:05:16+02:00",
        "reminder": "08:00:00",
        "labels": ["audit", "monthly"],
        "accounts": [42],
    })
}

#[derive(Codable)]
struct Doubled {
    value: Option<Option<i32>>,
}

#[derive(Codable, Debug, PartialEq, Clone, Copy)]
#[codec(transparent)]
struct UserId(Uuid);

#[derive(Codable, Debug, PartialEq)]
struct Account {
    owner: UserId,
    backup: Option<UserId>,
    members: Vec<UserId>,
}

fn schema_error(err: CodecError) -> SchemaError {
    match err.into_kind() {
        ErrorKind::Schema(err) => err,
        other => panic!("expected a schema error, found {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn record_round_trip() {
    let registry = CodecRegistry::new();
    let tree = json!({
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "name": "Alice",
        "age": 31,
        "email": "alice@example.com",
        "tags": ["admin"],
        "scores": { "math": 1.5 },
        "friends": [{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Bob",
            "age": 29,
            "email": null,
            "tags": [],
            "scores": {},
            "friends": [],
        }],
    });

    let person: Person = registry.decode(&tree).unwrap();
    assert_eq!(person, alice());
    assert_eq!(registry.encode(&person).unwrap(), tree);
}

#[test]
fn json_text_round_trip() {
    let registry = CodecRegistry::new();
    let text = registry.to_json(&alice()).unwrap();
    assert_eq!(registry.from_json::<Person>(&text).unwrap(), alice());

    let pretty = registry.to_json_pretty(&alice()).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(registry.from_json::<Person>(&pretty).unwrap(), alice());
}

#[test]
fn malformed_text_is_a_syntax_error() {
    let registry = CodecRegistry::new();
    let err = registry.from_json::<Person>("{\"name\": ").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Syntax(_)));
    assert!(err.path().is_root());
}

#[test]
fn top_level_wrappers() {
    let registry = CodecRegistry::new();

    let node: Box<Node> = registry.decode(&json!({ "value": 1, "next": null })).unwrap();
    assert_eq!(node.value, 1);

    let absent: Option<Node> = registry.decode(&json!(null)).unwrap();
    assert_eq!(absent, None);

    let levels: Vec<Level> = registry.decode(&json!(["hi", "lo"])).unwrap();
    assert_eq!(levels, [Level::High, Level::Low]);
}

// -----------------------------------------------------------------------------
// Registration

#[test]
fn registration_is_idempotent() {
    let registry = CodecRegistry::new();
    registry.register_record::<Person>().unwrap();
    assert_eq!(registry.record_count(), 1);
    assert!(registry.contains_record(TypeId::of::<Person>()));

    registry.register_record::<Person>().unwrap();
    assert_eq!(registry.record_count(), 1);
}

#[test]
fn cached_plans_keep_their_scalar() {
    let mut registry = CodecRegistry::new();
    registry.register_record::<Person>().unwrap();

    registry.register_scalar::<Uuid>(
        |id| Ok(json!(id.simple().to_string())),
        |_| Err(CodecError::coercion("Uuid", "disabled")),
    );

    // The plan of `Person` was derived with the built-in decoder.
    let person: Person = registry.decode(&registry.encode(&alice()).unwrap()).unwrap();
    assert_eq!(person, alice());

    // Plans derived afterwards use the replacement.
    let err = registry.decode::<Uuid>(&json!("00000000-0000-0000-0000-000000000000")).unwrap_err();
    assert!(err.is_coercion());
}

#[test]
fn registration_rejects_non_records() {
    let registry = CodecRegistry::new();
    let err = registry.register_record::<Level>().unwrap_err();
    assert!(matches!(schema_error(err), SchemaError::NotARecord { .. }));
    assert_eq!(registry.record_count(), 0);
}

#[cfg(all(feature = "auto_register", feature = "derive"))]
#[test]
fn auto_register_finds_marked_records() {
    let registry = CodecRegistry::new();
    let count = registry.auto_register().unwrap();
    assert!(count >= 1);
    assert!(registry.contains_record(TypeId::of::<Registered>()));
    assert!(!registry.contains_record(TypeId::of::<Person>()));
}

#[test]
fn registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CodecRegistry>();

    let registry = CodecRegistry::new();
    let tree = registry.encode(&alice()).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let person: Person = registry.decode(&tree).unwrap();
                assert_eq!(person, alice());
            });
        }
    });
    assert_eq!(registry.record_count(), 1);

    let registered: Registered = registry.decode(&json!({ "tick": 3 })).unwrap();
    assert_eq!(registered, Registered { tick: 3 });
}

// -----------------------------------------------------------------------------
// Recursive records

#[test]
fn self_referencing_record() {
    let registry = CodecRegistry::new();
    registry.register_record::<Node>().unwrap();
    assert_eq!(registry.record_count(), 1);

    let tree = json!({
        "value": 1,
        "next": { "value": 2, "next": { "value": 3, "next": null } },
    });
    let node: Node = registry.decode(&tree).unwrap();
    let third = node.next.as_ref().and_then(|next| next.next.as_ref()).unwrap();
    assert_eq!(third.value, 3);
    assert_eq!(third.next, None);
    assert_eq!(registry.encode(&node).unwrap(), tree);
}

#[test]
fn recursion_through_sequences() {
    let registry = CodecRegistry::new();
    let tree = json!({
        "label": "root",
        "children": [
            { "label": "a", "children": [{ "label": "a1", "children": [] }] },
            { "label": "b", "children": [] },
        ],
    });

    let root: Tree = registry.decode(&tree).unwrap();
    assert_eq!(root.children[0].children[0].label, "a1");
    assert_eq!(registry.encode(&root).unwrap(), tree);
}

#[test]
fn mutually_recursive_records() {
    let registry = CodecRegistry::new();
    registry.register_record::<Parent>().unwrap();
    assert!(registry.contains_record(TypeId::of::<Child>()));
    assert_eq!(registry.record_count(), 2);

    let tree = json!({
        "name": "p",
        "child": { "name": "c", "parent": { "name": "q", "child": null } },
    });
    let parent: Parent = registry.decode(&tree).unwrap();
    let grand = parent.child.unwrap().parent.unwrap();
    assert_eq!(grand.name, "q");
}

// -----------------------------------------------------------------------------
// Fields

#[test]
fn null_and_missing_are_different() {
    let registry = CodecRegistry::new();
    let mut tree = registry.encode(&alice()).unwrap();

    tree["email"] = json!(null);
    let person: Person = registry.decode(&tree).unwrap();
    assert_eq!(person.email, None);

    tree.as_object_mut().unwrap().remove("email");
    let err = registry.decode::<Person>(&tree).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::Shape(ShapeError::MissingField { field: "email" })
    );
    assert_eq!(err.path().to_string(), "$.email");
}

#[test]
fn null_for_required_field() {
    let registry = CodecRegistry::new();
    let mut tree = registry.encode(&alice()).unwrap();
    tree["name"] = json!(null);

    let err = registry.decode::<Person>(&tree).unwrap_err();
    assert!(err.is_shape());
    assert_eq!(err.path().to_string(), "$.name");
}

#[test]
fn extra_keys_are_ignored() {
    let registry = CodecRegistry::new();
    let node: Node = registry
        .decode(&json!({ "value": 7, "next": null, "comment": "ignored" }))
        .unwrap();
    assert_eq!(node, Node { value: 7, next: None });
}

#[test]
fn errors_carry_their_path() {
    let registry = CodecRegistry::new();
    let mut tree = registry.encode(&alice()).unwrap();
    tree["friends"][0]["age"] = json!("old");

    let err = registry.decode::<Person>(&tree).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::Shape(ShapeError::Expected {
            expected: TreeShape::Number,
            found: TreeShape::Text,
        })
    );
    assert_eq!(err.path().to_string(), "$.friends[0].age");

    tree["friends"] = json!({});
    let err = registry.decode::<Person>(&tree).unwrap_err();
    assert!(err.is_shape());
    assert_eq!(err.path().to_string(), "$.friends");

    let mut tree = registry.encode(&alice()).unwrap();
    tree["scores"]["math"] = json!(true);
    let err = registry.decode::<Person>(&tree).unwrap_err();
    assert_eq!(err.path().to_string(), r#"$.scores["math"]"#);
}

#[test]
fn rename_changes_the_tree_key() {
    let registry = CodecRegistry::new();
    let alarm = Alarm {
        level: Level::High,
        priority: Priority::Major,
        fired_at: Utc.with_ymd_and_hms(2021, 4, 23, 9, 5, 16).unwrap(),
    };

    let tree = registry.encode(&alarm).unwrap();
    assert_eq!(
        tree,
        json!({ "level": "hi", "priority": 2, "fired-at": "2021-04-23T09:05:16Z" })
    );
    assert_eq!(registry.decode::<Alarm>(&tree).unwrap(), alarm);

    let err = registry
        .decode::<Alarm>(&json!({ "level": "hi", "priority": 2, "fired_at": "2021-04-23T09:05:16Z" }))
        .unwrap_err();
    assert_eq!(err.path().to_string(), "$.fired-at");
}

// -----------------------------------------------------------------------------
// Scalars

#[test]
fn timestamps_keep_their_text() {
    let registry = CodecRegistry::new();
    for text in ["2021-04-23T09:05:16Z", "2021-04-23T09:05:16.157Z"] {
        let at: DateTime<Utc> = registry.decode(&json!(text)).unwrap();
        assert_eq!(registry.encode(&at).unwrap(), json!(text));
    }

    let at: DateTime<Utc> = registry.decode(&json!("2021-04-23T11:05:16+02:00")).unwrap();
    assert_eq!(at, Utc.with_ymd_and_hms(2021, 4, 23, 9, 5, 16).unwrap());

    let err = registry.decode::<DateTime<Utc>>(&json!("yesterday")).unwrap_err();
    assert!(err.is_coercion());
}

#[test]
fn aware_time_of_day_has_no_text() {
    let registry = CodecRegistry::new();
    let naive = TimeOfDay::from(NaiveTime::from_hms_opt(9, 5, 16).unwrap());
    assert_eq!(registry.encode(&naive).unwrap(), json!("09:05:16"));

    let aware: TimeOfDay = registry.decode(&json!("09:05:16+02:00")).unwrap();
    assert!(aware.is_aware());
    assert!(registry.encode(&aware).unwrap_err().is_coercion());
}

#[test]
fn scalar_codec_can_be_replaced() {
    let mut registry = CodecRegistry::new();
    registry.register_scalar::<Uuid>(
        |id| Ok(json!(id.simple().to_string())),
        |tree| {
            let text = tree.as_str().unwrap_or_default();
            Uuid::parse_str(text).map_err(|err| CodecError::coercion("Uuid", err))
        },
    );

    let id = Uuid::nil();
    assert_eq!(registry.encode(&id).unwrap(), json!("00000000000000000000000000000000"));
    assert_eq!(registry.decode::<Uuid>(&json!("00000000000000000000000000000000")).unwrap(), id);
}

#[test]
fn empty_registry_has_no_scalars() {
    let registry = CodecRegistry::empty();

    let err = registry.encode(&Uuid::nil()).unwrap_err();
    assert!(err.is_unregistered());

    let err = registry.decode::<Person>(&json!({})).unwrap_err();
    assert_eq!(
        schema_error(err.clone()),
        SchemaError::Unresolvable {
            ty: core::any::type_name::<Uuid>()
        }
    );
    assert_eq!(err.path().to_string(), "$.id");
    assert_eq!(registry.record_count(), 0);

    // Natives need no registration.
    assert_eq!(registry.encode(&vec![1_u8, 2]).unwrap(), json!([1, 2]));
}

#[test]
fn every_builtin_scalar_in_one_record() {
    let registry = CodecRegistry::new();
    registry.register_record::<Ledger>().unwrap();

    let ledger: Ledger = registry.decode(&ledger_tree()).unwrap();
    assert_eq!(ledger.amount, "12.5".parse::<BigDecimal>().unwrap());
    assert_eq!(ledger.booked_on, NaiveDate::from_ymd_opt(2021, 4, 23).unwrap());
    assert_eq!(ledger.local.offset().local_minus_utc(), 2 * 3600);
    assert_eq!(ledger.settled, Utc.with_ymd_and_hms(2021, 4, 24, 0, 0, 0).unwrap());
    assert!(!ledger.reminder.is_aware());
    assert_eq!(ledger.labels, BTreeSet::from([String::from("audit"), String::from("monthly")]));
    assert_eq!(ledger.accounts, HashSet::from([42_u32]));

    let tree = registry.encode(&ledger).unwrap();
    assert_eq!(tree, ledger_tree());
    assert_eq!(registry.decode::<Ledger>(&tree).unwrap(), ledger);
}

#[test]
fn sets_read_sequences_only() {
    let registry = CodecRegistry::new();
    let mut tree = ledger_tree();
    tree["labels"] = json!({ "audit": true });

    let err = registry.decode::<Ledger>(&tree).unwrap_err();
    assert_eq!(err.path().to_string(), "$.labels");
    assert_eq!(
        err.kind(),
        &ErrorKind::Shape(ShapeError::Expected {
            expected: TreeShape::Sequence,
            found: TreeShape::Mapping,
        })
    );

    // Repeated items collapse into one member.
    tree["labels"] = json!(["audit", "audit"]);
    let ledger: Ledger = registry.decode(&tree).unwrap();
    assert_eq!(ledger.labels.len(), 1);
}

// -----------------------------------------------------------------------------
// Transparent wrappers

#[test]
fn transparent_wrapper_uses_the_inner_codec() {
    assert!(UserId::type_info().type_is::<Uuid>());

    let registry = CodecRegistry::new();
    let owner = UserId(Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8));
    let account = Account {
        owner,
        backup: None,
        members: vec![owner, UserId(Uuid::nil())],
    };

    let tree = registry.encode(&account).unwrap();
    assert_eq!(
        tree,
        json!({
            "owner": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "backup": null,
            "members": [
                "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "00000000-0000-0000-0000-000000000000",
            ],
        })
    );
    assert_eq!(registry.decode::<Account>(&tree).unwrap(), account);
    assert_eq!(registry.decode::<UserId>(&json!(tree["owner"])).unwrap(), owner);

    let err = registry
        .decode::<Account>(&json!({ "owner": "nobody", "backup": null, "members": [] }))
        .unwrap_err();
    assert!(err.is_coercion());
    assert_eq!(err.path().to_string(), "$.owner");
}

// -----------------------------------------------------------------------------
// Enums and mappings

#[test]
fn unknown_member_value() {
    let registry = CodecRegistry::new();
    assert!(registry.decode::<Level>(&json!("mid")).unwrap_err().is_coercion());
    assert!(registry.decode::<Level>(&json!("Low")).unwrap_err().is_coercion());
    assert!(registry.decode::<Priority>(&json!(3)).unwrap_err().is_coercion());
    assert_eq!(registry.decode::<Priority>(&json!(1)).unwrap(), Priority::Minor);
}

#[test]
fn mapping_keys_of_number_type() {
    let registry = CodecRegistry::new();
    let tally = Tally {
        by_id: HashMap::from([(7, "seven".into())]),
        flags: BTreeMap::from([(false, -1), (true, 1)]),
    };

    let tree = registry.encode(&tally).unwrap();
    assert_eq!(
        tree,
        json!({ "by_id": { "7": "seven" }, "flags": { "false": -1, "true": 1 } })
    );
    assert_eq!(registry.decode::<Tally>(&tree).unwrap(), tally);

    let err = registry
        .decode::<Tally>(&json!({ "by_id": { "seven": "7" }, "flags": {} }))
        .unwrap_err();
    assert_eq!(err.path().to_string(), r#"$.by_id["seven"]"#);
}

#[test]
fn keys_written_twice_are_rejected() {
    let registry = CodecRegistry::new();
    // Both times of day are written with millisecond precision.
    let times = BTreeMap::from([
        (NaiveTime::from_hms_micro_opt(9, 5, 16, 157_000).unwrap(), 1_u8),
        (NaiveTime::from_hms_micro_opt(9, 5, 16, 157_999).unwrap(), 2_u8),
    ]);
    let err = registry.encode(&times).unwrap_err();
    assert!(err.is_coercion());
    assert!(err.to_string().contains("09:05:16.157"));

    let distinct = BTreeMap::from([
        (NaiveTime::from_hms_milli_opt(9, 5, 16, 157).unwrap(), 1_u8),
        (NaiveTime::from_hms_milli_opt(9, 5, 16, 158).unwrap(), 2_u8),
    ]);
    assert_eq!(
        registry.encode(&distinct).unwrap(),
        json!({ "09:05:16.157": 1, "09:05:16.158": 2 })
    );
}

#[test]
fn keys_read_as_the_same_key_are_rejected() {
    let registry = CodecRegistry::new();
    let err = registry
        .decode::<Tally>(&json!({ "by_id": { "1": "a", " 1": "b" }, "flags": {} }))
        .unwrap_err();
    assert!(err.is_coercion());
    assert_eq!(err.path().to_string(), "$.by_id");

    let tally: Tally = registry
        .decode(&json!({ "by_id": { " 1": "b" }, "flags": {} }))
        .unwrap();
    assert_eq!(tally.by_id, HashMap::from([(1_u32, String::from("b"))]));
}

// -----------------------------------------------------------------------------
// Schema errors

#[test]
fn unions_fail_registration() {
    let registry = CodecRegistry::new();

    let err = registry.register_record::<Choice>().unwrap_err();
    assert_eq!(err.path().to_string(), "$.choice");
    assert!(matches!(schema_error(err), SchemaError::UnsupportedUnion { .. }));

    let err = registry.register_record::<Strict>().unwrap_err();
    assert!(matches!(schema_error(err), SchemaError::UnsupportedUnion { .. }));

    // Nothing of a failed derivation is published.
    let err = registry.register_record::<Outer>().unwrap_err();
    assert_eq!(err.path().to_string(), "$.inner.choice");
    assert_eq!(registry.record_count(), 0);
}

#[test]
fn containers_need_type_arguments() {
    let registry = CodecRegistry::new();
    let err = registry.register_record::<Bare>().unwrap_err();
    assert_eq!(err.path().to_string(), "$.items");
    assert_eq!(
        schema_error(err),
        SchemaError::TypeArguments {
            ty: core::any::type_name::<BareList>(),
            expected: 1,
            found: 0,
        }
    );
}

#[test]
fn optional_of_optional_fails_registration() {
    let registry = CodecRegistry::new();
    let err = registry.register_record::<Doubled>().unwrap_err();
    assert_eq!(err.path().to_string(), "$.value");
    assert!(matches!(schema_error(err), SchemaError::NestedOptional { .. }));
    assert_eq!(registry.record_count(), 0);
}
