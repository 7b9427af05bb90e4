//! Ending classification tables
//!
//! Transcribed from the reference Korean sentence-splitting rule data. Each
//! table maps a surface morpheme to the union of positional constraints that
//! hold for it in that category. Entry order follows the source data: stem
//! (`PREV`) blocks first, then the connective and particle vetoes.

use crate::category::PositionRequirement as Pr;

// DA_EOJEOL: 73 entries
pub(super) const DA_EOJEOL: &[(&str, Pr)] = &[
    ("갔", Pr::PREV),
    ("간", Pr::PREV),
    ("겠", Pr::PREV),
    ("겼", Pr::PREV),
    ("같", Pr::PREV),
    ("놨", Pr::PREV),
    ("녔", Pr::PREV),
    ("니", Pr::PREV),
    ("논", Pr::PREV),
    ("낸", Pr::PREV),
    ("냈", Pr::PREV),
    ("뒀", Pr::PREV),
    ("때", Pr::PREV),
    ("랐", Pr::PREV),
    ("럽", Pr::PREV),
    ("렵", Pr::PREV),
    ("렸", Pr::PREV),
    ("뤘", Pr::PREV),
    ("몄", Pr::PREV),
    ("밌", Pr::PREV),
    ("볐", Pr::PREV),
    ("볍", Pr::PREV),
    ("봤", Pr::PREV),
    ("섰", Pr::PREV),
    ("샜", Pr::PREV),
    ("셨", Pr::PREV),
    ("싼", Pr::PREV),
    ("싸", Pr::PREV),
    ("않", Pr::PREV),
    ("았", Pr::PREV),
    ("없", Pr::PREV),
    ("었", Pr::PREV),
    ("였", Pr::PREV),
    ("온", Pr::PREV),
    ("웠", Pr::PREV),
    ("이", Pr::PREV),
    ("인", Pr::PREV),
    ("있", Pr::PREV),
    ("진", Pr::PREV),
    ("졌", Pr::PREV),
    ("쳤", Pr::PREV),
    ("췄", Pr::PREV),
    ("챘", Pr::PREV),
    ("켰", Pr::PREV),
    ("켠", Pr::PREV),
    ("팠", Pr::PREV),
    ("펐", Pr::PREV),
    ("폈", Pr::PREV),
    ("했", Pr::PREV),
    ("혔", Pr::PREV),
    ("한", Pr::NEXT),
    ("가", Pr::NEXT),
    ("고", Pr::NEXT.union(Pr::NEXT2)),
    ("는", Pr::NEXT.union(Pr::NEXT2)),
    ("라", Pr::NEXT),
    ("시", Pr::NEXT),
    ("등", Pr::NEXT),
    ("던", Pr::NEXT),
    ("든", Pr::NEXT),
    ("지", Pr::NEXT2),
    ("를", Pr::NEXT),
    ("운", Pr::NEXT),
    ("만", Pr::NEXT),
    ("며", Pr::NEXT.union(Pr::NEXT2)),
    ("면", Pr::NEXT.union(Pr::NEXT1).union(Pr::NEXT2)),
    ("서", Pr::NEXT2),
    ("싶", Pr::PREV.union(Pr::NEXT)),
    ("죠", Pr::NEXT),
    ("죵", Pr::NEXT),
    ("쥬", Pr::NEXT),
    ("하", Pr::NEXT1),
    ("해", Pr::NEXT1),
    ("도", Pr::NEXT2),
];

// DA_MORPH: 408 entries
pub(super) const DA_MORPH: &[(&str, Pr)] = &[
    ("간", Pr::PREV),
    ("갈", Pr::PREV),
    ("갉", Pr::PREV),
    ("감", Pr::PREV),
    ("갔", Pr::PREV),
    ("같", Pr::PREV),
    ("갚", Pr::PREV),
    ("개", Pr::PREV),
    ("걔", Pr::PREV),
    ("건", Pr::PREV),
    ("검", Pr::PREV),
    ("겪", Pr::PREV),
    ("곤", Pr::PREV),
    ("골", Pr::PREV),
    ("곪", Pr::PREV),
    ("곱", Pr::PREV),
    ("괴", Pr::PREV),
    ("군", Pr::PREV),
    ("굵", Pr::PREV),
    ("굶", Pr::PREV),
    ("굽", Pr::PREV),
    ("긁", Pr::PREV),
    ("긋", Pr::PREV),
    ("길", Pr::PREV),
    ("깊", Pr::PREV),
    ("까", Pr::PREV),
    ("깎", Pr::PREV),
    ("깐", Pr::PREV),
    ("깠", Pr::PREV),
    ("깨", Pr::PREV),
    ("깬", Pr::PREV),
    ("깼", Pr::PREV),
    ("꺾", Pr::PREV),
    ("껐", Pr::PREV),
    ("꼈", Pr::PREV),
    ("꼬", Pr::PREV),
    ("꼽", Pr::PREV),
    ("꽂", Pr::PREV),
    ("꾸", Pr::PREV),
    ("꾼", Pr::PREV),
    ("꿨", Pr::PREV),
    ("꿰", Pr::PREV),
    ("끼", Pr::PREV),
    ("낀", Pr::PREV),
    ("나", Pr::PREV),
    ("낚", Pr::PREV),
    ("난", Pr::PREV),
    ("날", Pr::PREV),
    ("낡", Pr::PREV),
    ("남", Pr::PREV),
    ("났", Pr::PREV),
    ("낮", Pr::PREV),
    ("내", Pr::PREV),
    ("낸", Pr::PREV),
    ("냈", Pr::PREV),
    ("넓", Pr::PREV),
    ("넘", Pr::PREV),
    ("넣", Pr::PREV),
    ("녹", Pr::PREV),
    ("논", Pr::PREV),
    ("놀", Pr::PREV),
    ("높", Pr::PREV),
    ("놓", Pr::PREV),
    ("놨", Pr::PREV),
    ("누", Pr::PREV),
    ("눈", Pr::PREV),
    ("눕", Pr::PREV),
    ("늘", Pr::PREV),
    ("늙", Pr::PREV),
    ("늦", Pr::PREV),
    ("닦", Pr::PREV),
    ("단", Pr::PREV),
    ("닫", Pr::PREV),
    ("달", Pr::PREV),
    ("닮", Pr::PREV),
    ("닳", Pr::PREV),
    ("담", Pr::PREV),
    ("답", Pr::PREV),
    ("닿", Pr::PREV),
    ("대", Pr::PREV),
    ("댄", Pr::PREV),
    ("댔", Pr::PREV),
    ("덜", Pr::PREV),
    ("덥", Pr::PREV),
    ("덮", Pr::PREV),
    ("데", Pr::PREV),
    ("덴", Pr::PREV),
    ("뎄", Pr::PREV),
    ("돈", Pr::PREV),
    ("돋", Pr::PREV),
    ("돌", Pr::PREV),
    ("돕", Pr::PREV),
    ("돼", Pr::PREV),
    ("됐", Pr::PREV),
    ("되", Pr::PREV),
    ("된", Pr::PREV),
    ("두", Pr::PREV),
    ("둔", Pr::PREV),
    ("둠", Pr::PREV),
    ("뒀", Pr::PREV),
    ("듣", Pr::PREV),
    ("들", Pr::PREV),
    ("딛", Pr::PREV),
    ("딪", Pr::PREV),
    ("따", Pr::PREV),
    ("딴", Pr::PREV),
    ("땄", Pr::PREV),
    ("땋", Pr::PREV),
    ("땠", Pr::PREV),
    ("떨", Pr::PREV),
    ("떴", Pr::PREV),
    ("떼", Pr::PREV),
    ("뗀", Pr::PREV),
    ("뛰", Pr::PREV),
    ("뜨", Pr::PREV),
    ("뜯", Pr::PREV),
    ("띄", Pr::PREV),
    ("띈", Pr::PREV),
    ("띠", Pr::PREV),
    ("막", Pr::PREV),
    ("많", Pr::PREV),
    ("말", Pr::PREV),
    ("맑", Pr::PREV),
    ("맞", Pr::PREV),
    ("맡", Pr::PREV),
    ("매", Pr::PREV),
    ("맨", Pr::PREV),
    ("맵", Pr::PREV),
    ("맸", Pr::PREV),
    ("맺", Pr::PREV),
    ("먹", Pr::PREV),
    ("멀", Pr::PREV),
    ("메", Pr::PREV),
    ("멘", Pr::PREV),
    ("멨", Pr::PREV),
    ("몬", Pr::PREV),
    ("몰", Pr::PREV),
    ("묵", Pr::PREV),
    ("묶", Pr::PREV),
    ("묻", Pr::PREV),
    ("물", Pr::PREV),
    ("묽", Pr::PREV),
    ("뭍", Pr::PREV),
    ("뭘", Pr::PREV),
    ("민", Pr::PREV),
    ("믿", Pr::PREV),
    ("밀", Pr::PREV),
    ("밉", Pr::PREV),
    ("박", Pr::PREV),
    ("받", Pr::PREV),
    ("밝", Pr::PREV),
    ("밟", Pr::PREV),
    ("배", Pr::PREV),
    ("밴", Pr::PREV),
    ("뱄", Pr::PREV),
    ("뱉", Pr::PREV),
    ("번", Pr::PREV),
    ("벌", Pr::PREV),
    ("벗", Pr::PREV),
    ("베", Pr::PREV),
    ("벤", Pr::PREV),
    ("보", Pr::PREV),
    ("볶", Pr::PREV),
    ("본", Pr::PREV),
    ("봤", Pr::PREV),
    ("봬", Pr::PREV),
    ("뵀", Pr::PREV),
    ("뵈", Pr::PREV),
    ("뵌", Pr::PREV),
    ("분", Pr::PREV),
    ("붇", Pr::PREV),
    ("불", Pr::PREV),
    ("붉", Pr::PREV),
    ("붓", Pr::PREV),
    ("붙", Pr::PREV),
    ("비", Pr::PREV),
    ("빈", Pr::PREV),
    ("빌", Pr::PREV),
    ("빚", Pr::PREV),
    ("빤", Pr::PREV),
    ("빨", Pr::PREV),
    ("빻", Pr::PREV),
    ("빼", Pr::PREV),
    ("뺀", Pr::PREV),
    ("뺐", Pr::PREV),
    ("뻗", Pr::PREV),
    ("뻤", Pr::PREV),
    ("뼜", Pr::PREV),
    ("삔", Pr::PREV),
    ("사", Pr::PREV),
    ("산", Pr::PREV),
    ("살", Pr::PREV),
    ("삵", Pr::PREV),
    ("샀", Pr::PREV),
    ("새", Pr::PREV),
    ("샌", Pr::PREV),
    ("샜", Pr::PREV),
    ("섞", Pr::PREV),
    ("선", Pr::PREV),
    ("섰", Pr::PREV),
    ("세", Pr::PREV),
    ("셌", Pr::PREV),
    ("속", Pr::PREV),
    ("솎", Pr::PREV),
    ("솟", Pr::PREV),
    ("숨", Pr::PREV),
    ("수", Pr::PREV),
    ("쉬", Pr::PREV),
    ("쉰", Pr::PREV),
    ("쉽", Pr::PREV),
    ("식", Pr::PREV),
    ("싣", Pr::PREV),
    ("싫", Pr::PREV),
    ("싸", Pr::PREV),
    ("싼", Pr::PREV),
    ("쌌", Pr::PREV),
    ("쌓", Pr::PREV),
    ("쌔", Pr::PREV),
    ("쌨", Pr::PREV),
    ("썩", Pr::PREV),
    ("썰", Pr::PREV),
    ("썼", Pr::PREV),
    ("쎄", Pr::PREV),
    ("쏘", Pr::PREV),
    ("쏜", Pr::PREV),
    ("쏟", Pr::PREV),
    ("쐈", Pr::PREV),
    ("쓰", Pr::PREV),
    ("쓴", Pr::PREV),
    ("쓸", Pr::PREV),
    ("씹", Pr::PREV),
    ("안", Pr::PREV),
    ("앉", Pr::PREV),
    ("않", Pr::PREV),
    ("알", Pr::PREV),
    ("앓", Pr::PREV),
    ("약", Pr::PREV),
    ("얇", Pr::PREV),
    ("얕", Pr::PREV),
    ("얘", Pr::PREV),
    ("언", Pr::PREV),
    ("얹", Pr::PREV),
    ("얻", Pr::PREV),
    ("얼", Pr::PREV),
    ("없", Pr::PREV),
    ("엎", Pr::PREV),
    ("엮", Pr::PREV),
    ("연", Pr::PREV),
    ("열", Pr::PREV),
    ("옅", Pr::PREV),
    ("오", Pr::PREV),
    ("온", Pr::PREV),
    ("옭", Pr::PREV),
    ("옳", Pr::PREV),
    ("왔", Pr::PREV),
    ("울", Pr::PREV),
    ("읊", Pr::PREV),
    ("일", Pr::PREV),
    ("읽", Pr::PREV),
    ("잃", Pr::PREV),
    ("입", Pr::PREV),
    ("있", Pr::PREV),
    ("잊", Pr::PREV),
    ("자", Pr::PREV),
    ("작", Pr::PREV),
    ("잔", Pr::PREV),
    ("잡", Pr::PREV),
    ("잤", Pr::PREV),
    ("잦", Pr::PREV),
    ("재", Pr::PREV),
    ("잰", Pr::PREV),
    ("쟀", Pr::PREV),
    ("쟤", Pr::PREV),
    ("적", Pr::PREV),
    ("전", Pr::PREV),
    ("절", Pr::PREV),
    ("젊", Pr::PREV),
    ("접", Pr::PREV),
    ("젓", Pr::PREV),
    ("졌", Pr::PREV),
    ("존", Pr::PREV),
    ("졸", Pr::PREV),
    ("좁", Pr::PREV),
    ("좋", Pr::PREV),
    ("주", Pr::PREV),
    ("죽", Pr::PREV),
    ("준", Pr::PREV),
    ("줍", Pr::PREV),
    ("줬", Pr::PREV),
    ("쥐", Pr::PREV),
    ("진", Pr::PREV),
    ("질", Pr::PREV),
    ("집", Pr::PREV),
    ("짓", Pr::PREV),
    ("짖", Pr::PREV),
    ("짙", Pr::PREV),
    ("짜", Pr::PREV),
    ("짧", Pr::PREV),
    ("짰", Pr::PREV),
    ("째", Pr::PREV),
    ("짼", Pr::PREV),
    ("쨌", Pr::PREV),
    ("쩐", Pr::PREV),
    ("쩔", Pr::PREV),
    ("쪘", Pr::PREV),
    ("쫀", Pr::PREV),
    ("쬐", Pr::PREV),
    ("찌", Pr::PREV),
    ("찍", Pr::PREV),
    ("찐", Pr::PREV),
    ("찝", Pr::PREV),
    ("찢", Pr::PREV),
    ("차", Pr::PREV),
    ("찬", Pr::PREV),
    ("참", Pr::PREV),
    ("찼", Pr::PREV),
    ("찾", Pr::PREV),
    ("채", Pr::PREV),
    ("챈", Pr::PREV),
    ("챘", Pr::PREV),
    ("쳤", Pr::PREV),
    ("추", Pr::PREV),
    ("춘", Pr::PREV),
    ("춥", Pr::PREV),
    ("췄", Pr::PREV),
    ("치", Pr::PREV),
    ("친", Pr::PREV),
    ("캐", Pr::PREV),
    ("캤", Pr::PREV),
    ("컸", Pr::PREV),
    ("켜", Pr::PREV),
    ("켠", Pr::PREV),
    ("켰", Pr::PREV),
    ("크", Pr::PREV),
    ("키", Pr::PREV),
    ("킨", Pr::PREV),
    ("타", Pr::PREV),
    ("탄", Pr::PREV),
    ("탔", Pr::PREV),
    ("튀", Pr::PREV),
    ("튄", Pr::PREV),
    ("트", Pr::PREV),
    ("튼", Pr::PREV),
    ("파", Pr::PREV),
    ("팔", Pr::PREV),
    ("팠", Pr::PREV),
    ("패", Pr::PREV),
    ("팼", Pr::PREV),
    ("펐", Pr::PREV),
    ("펴", Pr::PREV),
    ("편", Pr::PREV),
    ("폈", Pr::PREV),
    ("푼", Pr::PREV),
    ("품", Pr::PREV),
    ("피", Pr::PREV),
    ("핀", Pr::PREV),
    ("핥", Pr::PREV),
    ("했", Pr::PREV),
    ("헌", Pr::PREV),
    ("휘", Pr::PREV),
    ("희", Pr::PREV),
    ("겠", Pr::PREV),
    ("겼", Pr::PREV),
    ("녔", Pr::PREV),
    ("니", Pr::PREV),
    ("때", Pr::PREV),
    ("랐", Pr::PREV),
    ("럽", Pr::PREV),
    ("렵", Pr::PREV),
    ("렸", Pr::PREV),
    ("뤘", Pr::PREV),
    ("몄", Pr::PREV),
    ("밌", Pr::PREV),
    ("볐", Pr::PREV),
    ("볍", Pr::PREV),
    ("셨", Pr::PREV),
    ("았", Pr::PREV),
    ("었", Pr::PREV),
    ("였", Pr::PREV),
    ("웠", Pr::PREV),
    ("이", Pr::PREV),
    ("인", Pr::PREV),
    ("혔", Pr::PREV),
    ("한", Pr::NEXT),
    ("가", Pr::PREV.union(Pr::NEXT)),
    ("고", Pr::NEXT.union(Pr::NEXT2)),
    ("구", Pr::NEXT.union(Pr::NEXT2)),
    ("는", Pr::NEXT.union(Pr::NEXT2)),
    ("라", Pr::NEXT),
    ("시", Pr::PREV.union(Pr::NEXT)),
    ("등", Pr::NEXT),
    ("던", Pr::PREV.union(Pr::NEXT)),
    ("든", Pr::PREV.union(Pr::NEXT)),
    ("지", Pr::PREV.union(Pr::NEXT2)),
    ("를", Pr::NEXT),
    ("운", Pr::PREV.union(Pr::NEXT)),
    ("만", Pr::NEXT),
    ("며", Pr::NEXT.union(Pr::NEXT2)),
    ("면", Pr::NEXT.union(Pr::NEXT1).union(Pr::NEXT2)),
    ("서", Pr::PREV.union(Pr::NEXT2)),
    ("싶", Pr::PREV.union(Pr::NEXT)),
    ("죠", Pr::NEXT),
    ("죵", Pr::NEXT),
    ("쥬", Pr::NEXT),
    ("하", Pr::PREV.union(Pr::NEXT1)),
    ("거", Pr::PREV.union(Pr::NEXT)),
    ("해", Pr::NEXT1),
    ("도", Pr::NEXT2),
];

// YO: 39 entries
pub(super) const YO: &[(&str, Pr)] = &[
    ("겨", Pr::PREV),
    ("거", Pr::PREV),
    ("구", Pr::PREV),
    ("군", Pr::PREV),
    ("걸", Pr::PREV),
    ("까", Pr::PREV),
    ("께", Pr::PREV),
    ("껴", Pr::PREV),
    ("네", Pr::PREV),
    ("나", Pr::PREV),
    ("니", Pr::PREV),
    ("데", Pr::PREV),
    ("든", Pr::PREV),
    ("려", Pr::PREV),
    ("서", Pr::PREV),
    ("세", Pr::PREV),
    ("아", Pr::PREV),
    ("어", Pr::PREV),
    ("워", Pr::PREV),
    ("에", Pr::PREV),
    ("예", Pr::PREV),
    ("을", Pr::PREV),
    ("져", Pr::PREV),
    ("줘", Pr::PREV),
    ("지", Pr::PREV),
    ("춰", Pr::PREV),
    ("해", Pr::PREV),
    ("먼", Pr::PREV),
    ("만", Pr::PREV),
    ("고", Pr::NEXT2),
    ("는", Pr::NEXT),
    ("라", Pr::NEXT1),
    ("등", Pr::NEXT),
    ("를", Pr::NEXT),
    ("즘", Pr::NEXT),
    ("소", Pr::NEXT),
    ("며", Pr::NEXT2),
    ("면", Pr::PREV.union(Pr::NEXT2)),
    ("하", Pr::NEXT1),
];

// JYO: 47 entries
pub(super) const JYO: &[(&str, Pr)] = &[
    ("거", Pr::PREV),
    ("가", Pr::PREV),
    ("갔", Pr::PREV),
    ("겠", Pr::PREV),
    ("같", Pr::PREV),
    ("놨", Pr::PREV),
    ("녔", Pr::PREV),
    ("냈", Pr::PREV),
    ("니", Pr::PREV),
    ("뒀", Pr::PREV),
    ("았", Pr::PREV),
    ("르", Pr::PREV),
    ("랐", Pr::PREV),
    ("럽", Pr::PREV),
    ("렵", Pr::PREV),
    ("렸", Pr::PREV),
    ("맞", Pr::PREV),
    ("몄", Pr::PREV),
    ("밌", Pr::PREV),
    ("볐", Pr::PREV),
    ("볍", Pr::PREV),
    ("봤", Pr::PREV),
    ("서", Pr::PREV),
    ("섰", Pr::PREV),
    ("셨", Pr::PREV),
    ("샜", Pr::PREV),
    ("않", Pr::PREV),
    ("없", Pr::PREV),
    ("었", Pr::PREV),
    ("였", Pr::PREV),
    ("이", Pr::PREV),
    ("졌", Pr::PREV),
    ("쳤", Pr::PREV),
    ("챘", Pr::PREV),
    ("켰", Pr::PREV),
    ("팠", Pr::PREV),
    ("폈", Pr::PREV),
    ("하", Pr::PREV),
    ("했", Pr::PREV),
    ("혔", Pr::PREV),
    ("고", Pr::PREV.union(Pr::NEXT2)),
    ("는", Pr::NEXT),
    ("등", Pr::NEXT),
    ("라", Pr::NEXT1),
    ("를", Pr::NEXT),
    ("며", Pr::NEXT2),
    ("면", Pr::PREV.union(Pr::NEXT2)),
];

// SB: 37 entries
pub(super) const SB: &[(&str, Pr)] = &[
    ("것", Pr::PREV),
    ("가", Pr::PREV),
    ("까", Pr::PREV),
    ("걸", Pr::PREV),
    ("껄", Pr::PREV),
    ("나", Pr::PREV),
    ("니", Pr::PREV),
    ("네", Pr::PREV),
    ("다", Pr::PREV),
    ("쎄", Pr::PREV),
    ("래", Pr::PREV),
    ("데", Pr::PREV),
    ("지", Pr::PREV),
    ("든", Pr::PREV),
    ("덩", Pr::PREV),
    ("등", Pr::PREV),
    ("랴", Pr::PREV),
    ("마", Pr::PREV),
    ("봐", Pr::PREV),
    ("서", Pr::PREV),
    ("셈", Pr::PREV),
    ("아", Pr::PREV),
    ("어", Pr::PREV),
    ("오", Pr::PREV),
    ("요", Pr::PREV),
    ("용", Pr::PREV),
    ("을", Pr::PREV),
    ("자", Pr::PREV),
    ("죠", Pr::PREV),
    ("쥬", Pr::PREV),
    ("죵", Pr::PREV),
    ("고", Pr::NEXT2),
    ("는", Pr::NEXT),
    ("라", Pr::PREV.union(Pr::NEXT)),
    ("며", Pr::NEXT2),
    ("면", Pr::NEXT2),
    ("하", Pr::NEXT1),
];

// COMMON: 48 entries
pub(super) const COMMON: &[(&str, Pr)] = &[
    ("ㄱ", Pr::CONT),
    ("ㄴ", Pr::CONT),
    ("ㄷ", Pr::CONT),
    ("ㄹ", Pr::CONT),
    ("ㅁ", Pr::CONT),
    ("ㅂ", Pr::CONT),
    ("ㅅ", Pr::CONT),
    ("ㅇ", Pr::CONT),
    ("ㅈ", Pr::CONT),
    ("ㅊ", Pr::CONT),
    ("ㅋ", Pr::CONT),
    ("ㅌ", Pr::CONT),
    ("ㅍ", Pr::CONT),
    ("ㅎ", Pr::CONT),
    ("ㅏ", Pr::CONT),
    ("ㅑ", Pr::CONT),
    ("ㅓ", Pr::CONT),
    ("ㅕ", Pr::CONT),
    ("ㅗ", Pr::CONT),
    ("ㅛ", Pr::CONT),
    ("ㅜ", Pr::CONT),
    ("ㅠ", Pr::CONT),
    ("ㅡ", Pr::CONT),
    ("ㅣ", Pr::CONT),
    ("^", Pr::CONT),
    (";", Pr::CONT),
    (".", Pr::CONT),
    ("?", Pr::CONT),
    ("!", Pr::CONT),
    ("~", Pr::CONT),
    ("…", Pr::CONT),
    ("\u{200d}", Pr::CONT),
    ("\u{fe00}", Pr::CONT),
    ("\u{fe01}", Pr::CONT),
    ("\u{fe02}", Pr::CONT),
    ("\u{fe03}", Pr::CONT),
    ("\u{fe04}", Pr::CONT),
    ("\u{fe05}", Pr::CONT),
    ("\u{fe06}", Pr::CONT),
    ("\u{fe07}", Pr::CONT),
    ("\u{fe08}", Pr::CONT),
    ("\u{fe09}", Pr::CONT),
    ("\u{fe0a}", Pr::CONT),
    ("\u{fe0b}", Pr::CONT),
    ("\u{fe0c}", Pr::CONT),
    ("\u{fe0d}", Pr::CONT),
    ("\u{fe0e}", Pr::CONT),
    ("\u{fe0f}", Pr::CONT),
];

// EOMI: 30 entries
pub(super) const EOMI: &[(&str, Pr)] = &[
    ("나", Pr::NEXT),
    ("고", Pr::NEXT.union(Pr::NEXT2)),
    ("구", Pr::NEXT.union(Pr::NEXT2)),
    ("라", Pr::NEXT),
    ("시", Pr::NEXT),
    ("다", Pr::NEXT),
    ("등", Pr::NEXT),
    ("던", Pr::NEXT),
    ("든", Pr::NEXT),
    ("지", Pr::NEXT2),
    ("요", Pr::NEXT),
    ("유", Pr::NEXT),
    ("용", Pr::NEXT),
    ("만", Pr::NEXT),
    ("은", Pr::NEXT.union(Pr::NEXT2)),
    ("는", Pr::NEXT.union(Pr::NEXT2)),
    ("이", Pr::NEXT),
    ("가", Pr::NEXT),
    ("을", Pr::NEXT),
    ("를", Pr::NEXT),
    ("의", Pr::NEXT),
    ("며", Pr::NEXT.union(Pr::NEXT2)),
    ("면", Pr::NEXT.union(Pr::NEXT1).union(Pr::NEXT2)),
    ("서", Pr::NEXT2),
    ("싶", Pr::NEXT),
    ("죠", Pr::NEXT),
    ("죵", Pr::NEXT),
    ("쥬", Pr::NEXT),
    ("하", Pr::NEXT1),
    ("도", Pr::NEXT.union(Pr::NEXT2)),
];
