/// Fatal assembly conditions. Any of these aborts the whole run with no
/// partial output; the only recovery is fixing the source.
#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("label {name} already defined at {address:#06x}")]
    DuplicateLabel { name: String, address: u32 },
    #[error("label {name} is not defined")]
    UndefinedLabel { name: String },
    #[error("no encoding for {mnemonic} with operands [{operands}]")]
    NoMatchingEncoding { mnemonic: String, operands: String },
    #[error("memory offset {offset} must be a multiple of the transfer size {multiple}")]
    MisalignedMemoryOffset { offset: i64, multiple: i64 },
    #[error("unknown register {name}")]
    UnknownRegister { name: String },
    #[error("{mnemonic} carries more than one label operand")]
    MultipleLabelOperands { mnemonic: String },
}
