#![no_main]
use curve25519::FieldElement;
use libfuzzer_sys::fuzz_target;

fn test_field(fe1: FieldElement, fe2: FieldElement, fe3: FieldElement) {
    // Associativity
    assert_eq!(fe1 + (fe2 + fe3), (fe1 + fe2) + fe3);
    assert_eq!(fe1 * (fe2 * fe3), (fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + FieldElement::ZERO, fe1);
    assert_eq!(fe1 * FieldElement::ONE, fe1);
    assert_eq!(fe1 - fe1, FieldElement::ZERO);

    // Distributivity
    assert_eq!(fe1 * (fe2 + fe3), fe1 * fe2 + fe1 * fe3);

    // Negation, squaring, inversion
    assert_eq!(fe1 + (-fe1), FieldElement::ZERO);
    assert_eq!(fe1.square(), fe1 * fe1);
    assert_eq!(fe1.square_and_double(), fe1.square() + fe1.square());
    assert_eq!(fe1.square_n(3), fe1.square().square().square());
    if !bool::from(fe1.is_zero()) {
        assert_eq!(fe1 * fe1.invert(), FieldElement::ONE);
    }

    // Encoding is canonical
    let bytes = fe2.to_bytes();
    assert!(bytes[31] & 0x80 == 0);
    assert_eq!(FieldElement::from_bytes(&bytes), fe2);
    assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let fe1 = FieldElement::from_bytes(data[0..32].try_into().unwrap());
    let fe2 = FieldElement::from_bytes(data[32..64].try_into().unwrap());
    let fe3 = FieldElement::from_bytes(data[64..96].try_into().unwrap());

    test_field(fe1, fe2, fe3);
});
