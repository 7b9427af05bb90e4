//! Phoneme-class stem sets and the closed preceding-word class
//!
//! `YO_STEMS`/`JYO_STEMS` are the verb and adjective stems compatible with the
//! polite endings "요"/"죠"; `HAM_PRECEDERS`/`UM_PRECEDERS` are the stem-final
//! syllables that validate the nominalized endings "함"/"음"; `BEFORE_WORDS`
//! are particles, adverbs, and pronouns that can precede an ambiguous ending
//! but never end a sentence themselves.

// YO_STEMS: 116 entries
pub(super) const YO_STEMS: &[&str] = &[
    "가", "감", "개", "걔", "걘", "괴", "까", "깨", "껴", "꿈", "꿔", "꿰", "끔", "낌",
    "나", "남", "내", "냄", "놂", "놔", "눠", "늚", "대", "댐", "데", "돼", "되", "됨",
    "둠", "듦", "듬", "따", "땀", "떠", "떼", "뜀", "뜸", "띔", "매", "메", "배", "베",
    "봬", "뵈", "빎", "빔", "빪", "뺌", "삠", "사", "삶", "삼", "새", "서", "세", "셈",
    "싸", "쌈", "쌔", "써", "썲", "쎄", "쏨", "쏴", "쓺", "씀", "앎", "암", "얘", "얜",
    "엶", "옮", "옴", "와", "왜", "자", "재", "잼", "쟤", "쟨", "젊", "져", "졺", "줌",
    "줘", "짜", "째", "쪄", "쬠", "찜", "차", "채", "쳐", "춤", "춰", "캐", "커", "켜",
    "켬", "킴", "타", "탐", "터", "텨", "튐", "틈", "팜", "패", "퍼", "펌", "펴", "폄",
    "품", "핌", "함", "해",
];

// JYO_STEMS: 311 entries
pub(super) const JYO_STEMS: &[&str] = &[
    "가", "갉", "갔", "갖", "같", "갚", "개", "걔", "걷", "걸", "검", "겪", "골", "곪",
    "곱", "괴", "굵", "굶", "굼", "굽", "긁", "긋", "길", "깊", "깎", "깠", "깨", "깼",
    "꺾", "껐", "꼈", "꼽", "꽂", "꾸", "꿇", "꿨", "꿰", "뀌", "끊", "끌", "끓", "끼",
    "낚", "날", "낡", "남", "났", "낮", "내", "냈", "넓", "넘", "넣", "녹", "놀", "높",
    "놓", "놨", "누", "눕", "늙", "늦", "닦", "닫", "달", "닮", "닳", "답", "닿", "대",
    "댔", "덜", "덥", "덮", "데", "뎄", "돋", "돌", "돕", "돼", "됐", "되", "두", "뒀",
    "듣", "들", "딛", "딪", "따", "땄", "땋", "땠", "떨", "떴", "떼", "뛰", "뜨", "뜯",
    "띄", "띠", "막", "많", "말", "맑", "맞", "맡", "매", "맵", "맸", "맺", "먹", "멀",
    "메", "멨", "몰", "묵", "묶", "묻", "묽", "뭍", "믿", "밀", "밉", "박", "받", "밝",
    "밟", "배", "뱄", "뱉", "벌", "벗", "베", "보", "볶", "봤", "봬", "뵀", "뵈", "붇",
    "불", "붉", "붓", "붙", "비", "빌", "빚", "빨", "빻", "빼", "뺐", "뻗", "뻤", "뼜",
    "사", "살", "삵", "샀", "새", "샌", "샛", "샜", "서", "섞", "섰", "세", "셌", "속",
    "솎", "솟", "숨", "쉬", "쉽", "시", "식", "싣", "싫", "싶", "싸", "쌌", "쌓", "쌔",
    "쌨", "써", "썩", "썰", "썼", "쎄", "쏘", "쏟", "쏴", "쐈", "쑤", "쓰", "쓸", "씌",
    "씹", "앉", "않", "알", "앓", "약", "얇", "얕", "얘", "얹", "얻", "얼", "없", "엎",
    "엮", "열", "옅", "옛", "오", "온", "옭", "옮", "옳", "와", "왔", "울", "읊", "일",
    "읽", "잃", "입", "있", "잊", "자", "작", "잡", "잤", "잦", "재", "잰", "쟀", "쟤",
    "적", "절", "젊", "접", "젓", "졌", "졸", "좇", "좋", "주", "죽", "줍", "줬", "쥐",
    "지", "질", "집", "짓", "짖", "짙", "짜", "짧", "짰", "째", "쨌", "쩔", "쪘", "쬐",
    "찌", "찍", "찐", "찝", "찢", "차", "찼", "찾", "채", "챘", "쳐", "쳤", "추", "춥",
    "춰", "췄", "치", "캐", "캤", "커", "컸", "켜", "켠", "켰", "크", "키", "타", "탔",
    "터", "튀", "트", "파", "팔", "팠", "패", "팼", "펐", "펴", "폈", "피", "하", "핥",
    "했", "휘", "희",
];

// HAM_PRECEDERS: 20 entries
pub(super) const HAM_PRECEDERS: &[&str] = &[
    "각", "끔", "끗", "듯", "륭", "리", "못", "분", "소", "실", "안", "야", "약", "용",
    "이", "절", "정", "족", "천", "편",
];

// UM_PRECEDERS: 21 entries
pub(super) const UM_PRECEDERS: &[&str] = &[
    "같", "겠", "났", "넓", "많", "셨", "싶", "않", "았", "없", "었", "였", "웠", "있",
    "작", "적", "졌", "좁", "좋", "찮", "했",
];

// BEFORE_WORDS: 71 entries
pub(super) const BEFORE_WORDS: &[&str] = &[
    "가", "가득", "거", "것", "게", "결코", "곳", "과", "과연", "그", "그녀", "그대", "금방",
    "까지", "께", "나", "내일", "너", "너무", "너희", "놈", "는", "님", "당신", "던지", "도",
    "도록", "든지", "따라", "때", "란", "랑", "로", "를", "만", "만치", "만큼", "매우", "몹시",
    "못", "별로", "부터", "분", "빨리", "뿐", "설마", "써", "아까", "아니", "에", "에서",
    "여기", "와", "우리", "은", "을", "이", "이리", "이미", "일찍", "잘", "저", "저기", "저리",
    "저희", "정말", "제발", "쪽", "토록", "한테", "히",
];
