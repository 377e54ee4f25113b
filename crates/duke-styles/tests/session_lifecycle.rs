//! End-to-end tests for resolve -> seal -> reset

use duke_styles::prelude::*;
use duke_styles::{ResolvedStyle, XfRecord};
use pretty_assertions::assert_eq;

fn scenario() -> [StyleDeclaration; 2] {
    [
        StyleDeclaration::new(Scope::Global).hidden(false).locked(true),
        StyleDeclaration::new(Scope::Field).locked(false).rotation(135),
    ]
}

#[test]
fn test_scenario_resolves_and_encodes_per_dialect() {
    let expected = ResolvedStyle::default()
        .hidden(false)
        .locked(false)
        .rotation(135);

    for (format, rotation) in [(FormatDescriptor::xlsx(), 135), (FormatDescriptor::xls(), -45)] {
        let session = StyleSession::new(format);
        let validated = session.validate(&scenario()).unwrap();
        assert_eq!(validated.as_resolved(), &expected);

        let handle = session.resolve(&scenario()).unwrap();
        let table = session.seal();
        assert_eq!(table.get(handle).unwrap().as_resolved(), &expected);

        let records: Vec<XfRecord> = table.records(session.format()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rotation, rotation);
        assert!(!records[0].locked);
        assert!(!records[0].hidden);
    }
}

#[test]
fn test_capacity_boundary() {
    const K: u16 = 8;
    let session = StyleSession::new(FormatDescriptor::xlsx().with_max_styles(K as usize));
    let decl = |indent: u16| [StyleDeclaration::new(Scope::Field).indent(indent)];

    for i in 0..K {
        assert_eq!(session.resolve(&decl(i)).unwrap().id(), i as u32);
    }

    let err = session.resolve(&decl(K)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    assert!(matches!(err, Error::CapacityExceeded { limit: 8, .. }));

    // Duplicates of interned styles still succeed
    assert_eq!(session.resolve(&decl(3)).unwrap().id(), 3);
    assert_eq!(session.len(), K as usize);
}

#[test]
fn test_overflow_style_replaces_new_styles_when_full() {
    let mut session = StyleSession::new(FormatDescriptor::xlsx().with_max_styles(3));
    let overflow = session
        .set_overflow_style(&[StyleDeclaration::new(Scope::Override).locked(false)])
        .unwrap();

    let a = session
        .resolve(&[StyleDeclaration::new(Scope::Field).indent(1)])
        .unwrap();
    let b = session
        .resolve(&[StyleDeclaration::new(Scope::Field).indent(2)])
        .unwrap();
    let c = session
        .resolve(&[StyleDeclaration::new(Scope::Field).indent(3)])
        .unwrap();

    assert_ne!(a, overflow);
    assert_ne!(b, overflow);
    assert_eq!(c, overflow);
    assert_eq!(session.len(), 3);

    // Errors other than capacity are still reported
    let err = session
        .resolve(&[StyleDeclaration::new(Scope::Field).rotation(-1)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_sealed_session_rejects_new_and_known_styles() {
    let session = StyleSession::new(FormatDescriptor::xlsx());
    session.resolve(&scenario()).unwrap();
    let table = session.seal();
    assert_eq!(table.len(), 1);

    for decls in [scenario().to_vec(), vec![StyleDeclaration::new(Scope::Type)]] {
        let err = session.resolve(&decls).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Sealed);
    }

    // Sealing again returns the same table
    assert_eq!(session.seal(), table);
}

#[test]
fn test_reset_starts_a_fresh_document() {
    let mut session = StyleSession::new(FormatDescriptor::xls());
    let old = session.resolve(&scenario()).unwrap();
    session
        .resolve(&[StyleDeclaration::new(Scope::Type).wrapped(true)])
        .unwrap();
    let old_table = session.seal();
    assert_eq!(old_table.len(), 2);

    session.reset();
    assert_eq!(session.state(), duke_styles::RegistryState::Open);
    assert!(session.is_empty());
    assert_eq!(session.overflow_style(), None);

    let new = session
        .resolve(&[StyleDeclaration::new(Scope::Type).wrapped(true)])
        .unwrap();
    assert_eq!(new.id(), 0);

    let table = session.seal();
    assert_eq!(table.len(), 1);
    assert!(table.get(old).is_none());
    assert!(table.get(new).is_some());
    assert!(old_table.get(new).is_none());
}

#[test]
fn test_errors_name_attribute_and_value() {
    let resolver = StyleScopeResolver::new()
        .with_defaults(StyleDefaults::builtin().without(Attribute::VerticalAlignment));
    let session = StyleSession::new(FormatDescriptor::xls()).with_resolver(resolver);

    let err = session.resolve(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.to_string(), "No value and no default for attribute `vertical_alignment`");

    let decl = StyleDeclaration::new(Scope::Field)
        .vertical_alignment(VerticalAlignment::Top)
        .fill_pattern(PatternType::Solid)
        .fill_foreground_color(Color::Indexed(99));
    let err = session.resolve(&[decl]).unwrap_err();
    assert_eq!(err.attribute(), Some(Attribute::FillForegroundColor));
    assert!(err.to_string().contains("99"));
    assert!(session.is_empty());
}

#[test]
fn test_indexed_dialect_maps_rgb_and_keeps_palette() {
    let session = StyleSession::new(FormatDescriptor::xls());
    let rgb = session
        .resolve(&[StyleDeclaration::new(Scope::Field).fill_foreground_color(Color::rgb(0, 0, 128))])
        .unwrap();
    let indexed = session
        .resolve(&[StyleDeclaration::new(Scope::Field).fill_foreground_color(Color::Indexed(18))])
        .unwrap();

    // Both end up as palette index 18
    assert_eq!(rgb, indexed);
    assert_eq!(session.len(), 1);
}

#[test]
fn test_number_formats_flow_into_records() {
    let mut session = StyleSession::new(FormatDescriptor::xlsx());
    let id = session.add_number_format("#,##0.000").unwrap();
    session.register_number_format(200, "yyyy-mm-dd hh:mm").unwrap();

    let handle = session
        .resolve(&[StyleDeclaration::new(Scope::Type).data_format(id)])
        .unwrap();
    session
        .resolve(&[StyleDeclaration::new(Scope::Type).data_format(200)])
        .unwrap();

    let table = session.seal();
    let records: Vec<XfRecord> = table.records(session.format()).collect();
    assert_eq!(records[handle.id() as usize].num_fmt_id, 164);
    assert_eq!(records[handle.id() as usize].num_fmt_code.as_deref(), Some("#,##0.000"));
    assert_eq!(records[1].num_fmt_code.as_deref(), Some("yyyy-mm-dd hh:mm"));
}

#[test]
fn test_overflow_style_does_not_survive_reset() {
    let mut session = StyleSession::new(FormatDescriptor::xlsx().with_max_styles(1));
    let overflow = session
        .set_overflow_style(&[StyleDeclaration::new(Scope::Override).locked(false)])
        .unwrap();
    assert_eq!(
        session
            .resolve(&[StyleDeclaration::new(Scope::Field).indent(1)])
            .unwrap(),
        overflow
    );

    session.reset();
    let first = session
        .resolve(&[StyleDeclaration::new(Scope::Field).indent(1)])
        .unwrap();
    let err = session
        .resolve(&[StyleDeclaration::new(Scope::Field).indent(2)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);

    let table = session.seal();
    assert!(table.get(first).is_some());
    assert!(table.get(overflow).is_none());
}
