//! Reserved words of the TMM assembly language.
//!
//! One static table maps every keyword to its category and sub-id;
//! instruction entries additionally record how many operands the parser
//! should expect. Lookup is linear and case-blind callers are expected to
//! lower-case the name first, as the lexer does.

use tm_core::cpu::tm::{Condition, Flag, Opcode, Register};

/// Directive sub-ids, dispatched by the parser after a leading `.`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectiveId {
    Org,
    Include,
    Incbin,
    Define,
    Undef,
    If,
    Else,
    Endif,
    Byte,
    Word,
    Long,
}

/// Keyword category together with its category-specific payload.
#[derive(Copy, Clone, Debug)]
pub enum KeywordKind {
    Directive(DirectiveId),
    Register(Register),
    Flag(Flag),
    Condition(Condition),
    Instruction { opcode: Opcode, operands: usize },
}

pub struct Keyword {
    pub name: &'static str,
    pub kind: KeywordKind,
}

const fn directive(name: &'static str, id: DirectiveId) -> Keyword {
    Keyword {
        name,
        kind: KeywordKind::Directive(id),
    }
}

const fn register(name: &'static str, reg: Register) -> Keyword {
    Keyword {
        name,
        kind: KeywordKind::Register(reg),
    }
}

const fn flag(name: &'static str, flag: Flag) -> Keyword {
    Keyword {
        name,
        kind: KeywordKind::Flag(flag),
    }
}

const fn condition(name: &'static str, condition: Condition) -> Keyword {
    Keyword {
        name,
        kind: KeywordKind::Condition(condition),
    }
}

const fn instruction(name: &'static str, opcode: Opcode, operands: usize) -> Keyword {
    Keyword {
        name,
        kind: KeywordKind::Instruction { opcode, operands },
    }
}

/// The keyword table. Earlier entries win when a name appears in more
/// than one category, so registers shadow the single-letter flags.
pub static KEYWORDS: &[Keyword] = &[
    // Directive keywords
    directive("org", DirectiveId::Org),
    directive("include", DirectiveId::Include),
    directive("incbin", DirectiveId::Incbin),
    directive("define", DirectiveId::Define),
    directive("undef", DirectiveId::Undef),
    directive("if", DirectiveId::If),
    directive("else", DirectiveId::Else),
    directive("endif", DirectiveId::Endif),
    directive("byte", DirectiveId::Byte),
    directive("word", DirectiveId::Word),
    directive("long", DirectiveId::Long),
    // Register keywords
    register("a", Register::A),
    register("aw", Register::Aw),
    register("ah", Register::Ah),
    register("al", Register::Al),
    register("b", Register::B),
    register("bw", Register::Bw),
    register("bh", Register::Bh),
    register("bl", Register::Bl),
    register("c", Register::C),
    register("cw", Register::Cw),
    register("ch", Register::Ch),
    register("cl", Register::Cl),
    register("d", Register::D),
    register("dw", Register::Dw),
    register("dh", Register::Dh),
    register("dl", Register::Dl),
    // Flag keywords
    flag("z", Flag::Z),
    flag("n", Flag::N),
    flag("h", Flag::H),
    flag("o", Flag::O),
    flag("u", Flag::U),
    flag("l", Flag::L),
    flag("s", Flag::S),
    // Condition keywords
    condition("nc", Condition::N),
    condition("cs", Condition::Cs),
    condition("cc", Condition::Cc),
    condition("zs", Condition::Zs),
    condition("zc", Condition::Zc),
    condition("os", Condition::Os),
    condition("us", Condition::Us),
    // Instruction keywords, with their expected operand counts
    instruction("nop", Opcode::Nop, 0),
    instruction("stop", Opcode::Stop, 0),
    instruction("halt", Opcode::Halt, 0),
    instruction("sec", Opcode::Sec, 1),
    instruction("cec", Opcode::Cec, 0),
    instruction("di", Opcode::Di, 0),
    instruction("ei", Opcode::Ei, 0),
    instruction("daa", Opcode::Daa, 0),
    instruction("cpl", Opcode::Cpl, 0),
    instruction("cpw", Opcode::Cpw, 0),
    instruction("cpb", Opcode::Cpb, 0),
    instruction("scf", Opcode::Scf, 0),
    instruction("ccf", Opcode::Ccf, 0),
    instruction("ld", Opcode::Ld, 2),
    instruction("ldq", Opcode::Ldq, 2),
    instruction("ldh", Opcode::Ldh, 2),
    instruction("st", Opcode::St, 2),
    instruction("stq", Opcode::Stq, 2),
    instruction("sth", Opcode::Sth, 2),
    instruction("mv", Opcode::Mv, 2),
    instruction("push", Opcode::Push, 1),
    instruction("pop", Opcode::Pop, 1),
    instruction("jmp", Opcode::Jmp, 2),
    instruction("jpb", Opcode::Jpb, 2),
    instruction("call", Opcode::Call, 2),
    instruction("rst", Opcode::Rst, 1),
    instruction("ret", Opcode::Ret, 1),
    instruction("reti", Opcode::Reti, 0),
    instruction("inc", Opcode::Inc, 1),
    instruction("dec", Opcode::Dec, 1),
    instruction("add", Opcode::Add, 2),
    instruction("adc", Opcode::Adc, 2),
    instruction("sub", Opcode::Sub, 2),
    instruction("sbc", Opcode::Sbc, 2),
    instruction("and", Opcode::And, 2),
    instruction("or", Opcode::Or, 2),
    instruction("xor", Opcode::Xor, 2),
    instruction("cmp", Opcode::Cmp, 2),
    instruction("sla", Opcode::Sla, 1),
    instruction("sra", Opcode::Sra, 1),
    instruction("srl", Opcode::Srl, 1),
    instruction("rl", Opcode::Rl, 1),
    instruction("rlc", Opcode::Rlc, 1),
    instruction("rr", Opcode::Rr, 1),
    instruction("rrc", Opcode::Rrc, 1),
    instruction("bit", Opcode::Bit, 2),
    instruction("set", Opcode::Set, 2),
    instruction("res", Opcode::Res, 2),
    instruction("swap", Opcode::Swap, 1),
    instruction("jps", Opcode::Jps, 0),
];

/// Find a keyword by lower-cased name, first match in table order.
pub fn lookup(name: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|keyword| keyword.name == name)
}

/// Find a directive keyword by lower-cased name.
pub fn lookup_directive(name: &str) -> Option<DirectiveId> {
    KEYWORDS.iter().find_map(|keyword| match keyword.kind {
        KeywordKind::Directive(id) if keyword.name == name => Some(id),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_shadow_flags() {
        // "c" names both a register and a flag; the register entry wins.
        let keyword = lookup("c").unwrap();
        assert!(matches!(keyword.kind, KeywordKind::Register(Register::C)));
    }

    #[test]
    fn instruction_operand_counts() {
        let ld = lookup("ld").unwrap();
        assert!(matches!(
            ld.kind,
            KeywordKind::Instruction {
                opcode: Opcode::Ld,
                operands: 2
            }
        ));
        let nop = lookup("nop").unwrap();
        assert!(matches!(
            nop.kind,
            KeywordKind::Instruction { operands: 0, .. }
        ));
    }

    #[test]
    fn directive_lookup() {
        assert_eq!(lookup_directive("byte"), Some(DirectiveId::Byte));
        assert_eq!(lookup_directive("add"), None);
        assert_eq!(lookup_directive("missing"), None);
    }

    #[test]
    fn unknown_name_is_not_a_keyword() {
        assert!(lookup("start").is_none());
    }
}
