//! Content hash for the sorted edge buffer.
//!
//! The mixer is an intentionally weak-but-fast 256-entry random-word table
//! combined with a left rotation, ported byte for byte from the reference
//! `graph_hash`/`graph_rnd_word` (itself seeded from
//! <http://www.fourmilab.ch/hotbits/>). `GraphBag` tolerates collisions via
//! probing and its equality check is the authority, not the hash, so this is
//! not strengthened.

#[rustfmt::skip]
const RND_WORD: [u64; 256] = [
    0x83CF8896EA4E3EC3u64, 0xBBB17A9BA2A00D09u64, 0xF8465F601D83D9EFu64, 0x7DC2A75D944E58E7u64,
    0x5D77A74C94ECCD38u64, 0x4D1D31AC0D59DA85u64, 0x8E2C06089CA0C029u64, 0x4FBD2851FB542AD4u64,
    0xA14746663F0255AAu64, 0xABCDA389197AC320u64, 0x23B6398E0398CB81u64, 0xE2EF883656A22607u64,
    0x77EC4A9593C08F81u64, 0x413D4357BF975B80u64, 0x739206246C8D84F0u64, 0x3F5C7A721E62AE20u64,
    0x4D6A57B949FF0B44u64, 0x7293CE3D65CA6FFCu64, 0x66CB8EFF45276FB0u64, 0x4891D5F9CCEF1640u64,
    0xA34B6E259628D97Du64, 0xC5BA75C31A3434E9u64, 0x9F65D872503ABF56u64, 0x291DEDB230C7E20Bu64,
    0xDE6D8B834C0D6409u64, 0x89F11EA94260E138u64, 0xF4F0858A2E62FB11u64, 0x6AA4C3179F8708A9u64,
    0x7E42E5738895E348u64, 0xFE7C24AEA09A2007u64, 0xF89177E56584CADAu64, 0xBB2480ED0C8274DEu64,
    0x39A8C4164B56B264u64, 0x7CC23E62657FC75Fu64, 0xBBBC788C85D13342u64, 0x6B6212E7BF389275u64,
    0x5F172B083CA5778Cu64, 0x161D4E195CD18764u64, 0x9FF9752629F382D1u64, 0x308B2F62A3F0D348u64,
    0xEAB4F1FA36DF4280u64, 0xFF1FBF269823BCDEu64, 0x743B812722117C92u64, 0xAB408DE10E57B0ECu64,
    0xEF21CFBB5260F659u64, 0x294BAE102BD35B1Du64, 0xC671A420A1008343u64, 0x13D057FCE889875Fu64,
    0x792D6015772002FFu64, 0x30065DA1BA990D2Fu64, 0xF1E3C5E6468E81F0u64, 0xAE1EDA7CF7838704u64,
    0xE76E4E281C6DB047u64, 0xF6CA235E900111AAu64, 0xD8E56D637ECF6778u64, 0xA9A724A2FA54D5D6u64,
    0xD2493A3B686AF8C2u64, 0xD9E661FF41AD6FA0u64, 0xCD4ACEE301163DB6u64, 0x6D595C1BC7D8134Cu64,
    0x8297349B280D9C6Bu64, 0x12BC02F464990648u64, 0xE94EB44A5EF9546Fu64, 0x3E242CCEE88AC748u64,
    0xBAD0B59C632CDBBAu64, 0x1034A9EB9A68CF13u64, 0x029DF71F1DCC162Au64, 0x0AD553CC235E6D4Du64,
    0x60A33EFFF870946Fu64, 0x0AFDD96C266E76ECu64, 0x4C7163A091DB4C25u64, 0x0DD1DA887FF33A55u64,
    0xBAC0272D6176EE97u64, 0x2C1711D5B785793Du64, 0x6F4F5FC04B808221u64, 0xDCC122206AEB230Du64,
    0xA1CE30FEE4124CC9u64, 0xCEA3E0857E2024F8u64, 0xDF9D4B403BA1FC33u64, 0x329DD044BAC9A7F0u64,
    0xAE03C251EE3C774Bu64, 0x79912137A1A8EA42u64, 0x108EA56D44B0837Au64, 0x0058F9E5E04C653Au64,
    0x715981667A5C6271u64, 0x5C3953FA79A49AC6u64, 0x0AFC95ABF6FAE6E5u64, 0x332C54DB2021CA30u64,
    0x6088908D66C379C7u64, 0xCFADD91A36E2307Fu64, 0x39727D0867DB3EBDu64, 0xBD3DA34AB35A2BFBu64,
    0x1035AE3BDA2A5236u64, 0x29E375A3846AF982u64, 0x975AD44A26999944u64, 0x95ED7843CF32D117u64,
    0xFF5EAA81000A2CC0u64, 0x857436BC72874BE2u64, 0x50BBCFDA2B5EDFA8u64, 0xCC33D3C4740BB47Cu64,
    0xB50F9DEAA2B2B088u64, 0x923F47741A4C2541u64, 0xFC3D8F8A12B11645u64, 0x6EDA3C8C433A6FBDu64,
    0x12C4CB72885845A0u64, 0xB1BD80E99B494DA6u64, 0x5CCE5D02A9F2BFA5u64, 0xA789E7634134FB2Fu64,
    0xD5CD642F77B4C9C8u64, 0x50A33FA4F881432Au64, 0x386FC0853787AA49u64, 0x109F729F74327DBAu64,
    0xB48A030209CB215Cu64, 0xB7329DE83021ADB4u64, 0x44C52EC2462D9429u64, 0x2A38FAD7E26A5A6Eu64,
    0x6097F6A5C2C69B0Au64, 0xDB9AB05BCBBDE70Fu64, 0x66ED03C363C423B7u64, 0x13434BC2CD2798CBu64,
    0x370AF8CC77B0DC67u64, 0xB4D275B994700E38u64, 0xA495C1D54F658C6Bu64, 0x6032ABF4DE746840u64,
    0x2BEEF970D62ACEC8u64, 0xE85314293422CDA5u64, 0x6D6216AD0D28E33Fu64, 0xDF7C10E72691614Bu64,
    0xD4B1FFEBC06B9B79u64, 0x30B0A09BCFAA0207u64, 0x6DA5E405274020B2u64, 0x61BF36DB94451EC1u64,
    0xA185D35C1F75F879u64, 0x770978A885449637u64, 0x519F4F91EBD0337Cu64, 0x862FA1D325C5FABBu64,
    0xD4EF853599B2C266u64, 0xD0EA903495C03923u64, 0xA6A8BCED48F7C408u64, 0x6E2C262C32EDE0A8u64,
    0xF04AC6580D990166u64, 0x2BBE87E81A138752u64, 0xB9F2DF291BB614C3u64, 0xF64EF4E8F8D0B10Cu64,
    0x175E361BA1A7FEFBu64, 0x5770F303F2D462B7u64, 0x7C02EE7A16EBF545u64, 0xA2C156942EFBE51Eu64,
    0x99FBCBC95BBD3439u64, 0x0A5B96EE76456B7Cu64, 0x5FA7E69FFC0E3300u64, 0x8CFC34762269EE55u64,
    0xB863974CD7866784u64, 0xD32B80D1564F2512u64, 0x0B497B2ECEC923B7u64, 0x3A9FF92895A7F31Cu64,
    0xCA81105A7BE78E10u64, 0xD505070480F73E51u64, 0x950195B000A4A188u64, 0xB6BAD44283B1A4F1u64,
    0x48CE940FABB630D1u64, 0x69087DC37776D457u64, 0xEC957AEE05F99996u64, 0x8780B9AF7DC2DC5Fu64,
    0xBF5FFDAFAA2AE303u64, 0x7230CFE62D708CAAu64, 0xCBA7A501826DB72Cu64, 0xF61625FACCB53679u64,
    0x2DA092C391D3C3AEu64, 0xD34B1FEEDFF61864u64, 0x80E6884D5496C07Bu64, 0x0875D1545ECDF1E2u64,
    0xFE63C5972EF12D12u64, 0xB7D703A4BD9F5F4Cu64, 0x94859BB2B6DA644Du64, 0xC14C7A6EFAD095FAu64,
    0x37B8F10909250927u64, 0xB60D9483BCEE4B04u64, 0x35EF0CF63DCB695Fu64, 0xBF5426F10C9AA5AFu64,
    0xD2ED87FE63F5D64Eu64, 0xE8E4918E3235B0CAu64, 0xC7B435AD77F61140u64, 0x176F0EF7BD4B2224u64,
    0xEC850F4DE93CF4D3u64, 0xCF7FD438EF1B1D9Fu64, 0x71D30D1192F29946u64, 0x96F52616713889BFu64,
    0x786135C9A11268C8u64, 0x980D7E4521FEAE45u64, 0x6694A67A27B1103Bu64, 0xF8363E6607B4BDAAu64,
    0x214582A1128B35BAu64, 0xEA8E9CD0B622AD97u64, 0xAA17DC68FC946769u64, 0x7AF0F16C14952078u64,
    0xB7F87881A35D69A2u64, 0x159C3A6C0BC4FCD1u64, 0x3E5C16D5399CD8B5u64, 0x25A975AEA7888D19u64,
    0x0FE8525E33CCA9D2u64, 0xCD483AF63165B7DAu64, 0x11E37661A64A73C6u64, 0x7BB72E48AD5B8567u64,
    0xB8320C8BAF5D6949u64, 0x5EB6896E1DB41DF2u64, 0xA39E95382A5A26CFu64, 0x460FFC688C9EE42Bu64,
    0x1877D32E0058ED54u64, 0x4AD2896A21BF0B83u64, 0x0374561815E56D9Fu64, 0x3B192CFC4A64087Bu64,
    0xA170AC8A680C19A6u64, 0x1AD917B932560E3Eu64, 0x83983FE605812AC5u64, 0xF4B9088ADFBA9FF1u64,
    0x506DEB6B87BF6DB5u64, 0x110750A7AA2CA2EEu64, 0xE17415AF0744C8F7u64, 0x4C3939BC5280B92Bu64,
    0x8B4C7F3236564155u64, 0x709EBF805FB2EDC1u64, 0xC97085B7F40A29C5u64, 0xC95F471500F0B7DFu64,
    0x9FEC3624CC8AFA09u64, 0xC27CF7A225306A4Fu64, 0x22A9FEB0F2D3793Eu64, 0x7BA6AC054EE8D3AFu64,
    0x72A068CC15BD388Cu64, 0x92756F48B02B556Du64, 0x35A7FEA606124BF7u64, 0x558FE7389FEC8278u64,
    0x3F6FE896CEB064DAu64, 0x10244197BA2F90D6u64, 0xCA6B5A588118A230u64, 0x4BD532988DC1EFFEu64,
    0x1429E904119B31B7u64, 0xCAF321F93587E1B7u64, 0x3BECB0B96FA7190Eu64, 0x16735080E9E0D453u64,
    0x9E1EC749490A50CAu64, 0xCDF74490CBA8D470u64, 0xEE15C663EA448F01u64, 0x4909FAB3A4591101u64,
    0x7AB026547242CCAAu64, 0xE10A1591A4100E95u64, 0xB4401834E771F605u64, 0xA23715D46963156Eu64,
    0x8D6BF796DD83D07Cu64, 0x3B2F61312E60F9A4u64, 0xAA4788B0AB1830D2u64, 0x75FE895C7C3A6F51u64,
    0x6ED960ED0C0D8787u64, 0xB264012E0E167DCCu64, 0xDC93ED8636C5BD24u64, 0x22697BE3E473DCFDu64,
];

fn rot(z: u64) -> u64 {
    (z << 1) | ((z & 0x8000_0000_0000_0000) >> 63)
}

/// Hashes the sorted raw bytes of a packed edge buffer.
///
/// Callers must sort the edge buffer first (the caller, not this function,
/// owns the "is sorted" bookkeeping, matching `graph_hash`'s `sort_edgebuf`
/// call site being the graph's responsibility).
pub(crate) fn hash_sorted_edges(sorted_edges: &[u64]) -> u64 {
    let bytes: &[u8] = bytemuck_le_bytes(sorted_edges);
    if bytes.is_empty() {
        return RND_WORD[0];
    }
    let mut h = RND_WORD[bytes[0] as usize];
    for &b in &bytes[1..] {
        h = RND_WORD[b as usize] ^ rot(h);
    }
    h
}

fn bytemuck_le_bytes(words: &[u64]) -> &[u8] {
    // SAFETY: u64 has no padding and any bit pattern is valid; the native
    // byte order matches the reference implementation's raw-memory read of
    // `long *edgebuf` on a little-endian host, which is the only platform
    // this tool targets.
    unsafe { std::slice::from_raw_parts(words.as_ptr() as *const u8, words.len() * 8) }
}
