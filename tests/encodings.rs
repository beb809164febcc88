use pretty_assertions::assert_eq;

use metag_asm::assemble;

fn encode(line: &str) -> (u32, u8) {
    let program = assemble(line).unwrap();
    let stmt = &program.statements[0];
    (stmt.value, stmt.size)
}

#[test]
fn add_core_data() {
    assert_eq!(encode("ADD D0.0, D0.1, D0.2"), (0x0014, 2));
}

#[test]
fn mul_long_result_bit() {
    // the D suffix requests a 64-bit result via the L2 bit
    assert_eq!(encode("MUL D0.0, D0.1, D0.2"), (0x6014, 2));
    assert_eq!(encode("MULD D0.0, D0.1, D0.2"), (0x6015, 2));
}

#[test]
fn flag_suffix_promotes_to_extended() {
    // Core ADD has no S bit, so the flags variant takes the extended form
    assert_eq!(encode("ADDS D0.0, D0.1, D0.2"), (0x0014_E000, 4));
}

#[test]
fn mov_address_immediate_core() {
    assert_eq!(encode("MOV A0.3, #5"), (0x8596, 2));
}

#[test]
fn mov_data_immediate_core() {
    assert_eq!(encode("MOV D0.0, #5"), (0x0816, 2));
}

#[test]
fn full_word_load_splits_into_halves() {
    // a 32-bit literal has no single encoding, it is written as a
    // MOV/MOVT pair over the two 16-bit halves
    assert_eq!(encode("MOV A0.0, #LO(0x12345678)"), (0x8462_C566, 4));
    assert_eq!(encode("MOVT A0.0, #HI(0x12345678)"), (0x8452_C123, 4));
}

#[test]
fn mov_control_register_long() {
    assert_eq!(encode("MOV TXMODE, #5"), (0x4028_B920, 4));
}

#[test]
fn mov_between_units_extended() {
    // D0 to D1 has no core form, falls to the cross-unit encoding
    assert_eq!(encode("MOV D0.3, D1.3"), (0x9C8F_C021, 4));
}

#[test]
fn cmp_cross_unit_o2r() {
    assert_eq!(encode("CMP D0.1, A1.2"), (0x7045, 2));
}

#[test]
fn load_store_share_one_layout() {
    assert_eq!(encode("GETD D0.3, [A0.2]"), (0xa9c1, 2));
    // stores take the register last, the encoding takes it first
    assert_eq!(encode("SETD [A0.2], D0.3"), (0xa1c1, 2));
}

#[test]
fn load_post_increment_extended() {
    // no core form supports post-increment
    assert_eq!(encode("GETD D0.0, [A0.3++]"), (0xA865_F039, 4));
}

#[test]
fn load_register_indexed() {
    assert_eq!(encode("GETD D0.0, [A0.2+A0.3]"), (0xA84D_E030, 4));
}

#[test]
fn branch_displacement_widths() {
    assert_eq!(encode("B #16"), (0x9408, 2));
    // out of core range, widens to the 19-bit form
    assert_eq!(encode("B #2048"), (0x9000_C020, 4));
}

#[test]
fn callr_link_register_forms() {
    assert_eq!(encode("CALLR D1RtP, #16"), (0x9808, 2));
    assert_eq!(encode("CALLR A1.5, #16"), (0x9808_C005, 4));
}

#[test]
fn switch_interrupt_descriptor() {
    assert_eq!(encode("SWITCH #0xffffff"), (0x9FFF, 2));
}

#[test]
fn nop_fixed_word() {
    assert_eq!(encode("NOP"), (0x93fe, 2));
}
