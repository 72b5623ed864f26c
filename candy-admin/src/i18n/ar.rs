//! Arabic strings

pub(super) const STRINGS: &[(&str, &str)] = &[
    ("common.loading", "جاري التحميل..."),
    ("common.error", "حدث خطأ"),
    ("common.save", "حفظ"),
    ("common.cancel", "إلغاء"),
    ("common.delete", "حذف"),
    ("common.edit", "تعديل"),
    ("common.view", "عرض"),
    ("common.search", "بحث"),
    ("common.noResults", "لا توجد نتائج"),
    ("auth.signIn", "تسجيل الدخول"),
    ("auth.signUp", "إنشاء حساب"),
    ("auth.signOut", "تسجيل الخروج"),
    ("auth.email", "البريد الإلكتروني"),
    ("auth.password", "كلمة المرور"),
    ("auth.confirmPassword", "تأكيد كلمة المرور"),
    ("auth.forgotPassword", "نسيت كلمة المرور؟"),
    ("auth.noAccount", "ليس لديك حساب؟"),
    ("auth.hasAccount", "لديك حساب بالفعل؟"),
    ("navigation.dashboard", "لوحة التحكم"),
    ("navigation.products", "المنتجات"),
    ("navigation.orders", "الطلبات"),
    ("navigation.users", "المستخدمون"),
    ("navigation.contentAI", "محتوى الذكاء الاصطناعي"),
    ("navigation.analytics", "التحليلات"),
    ("dashboard.welcome", "مرحباً، {{name}}!"),
    ("dashboard.overview", "نظرة سريعة على متجر الحلويات الخاص بك."),
    ("dashboard.totalCandies", "إجمالي الحلويات"),
    ("dashboard.activePromotions", "العروض النشطة"),
    ("dashboard.usersOnline", "المستخدمون المتصلون"),
    ("dashboard.siteSettings", "إعدادات الموقع"),
    ("contentAI.title", "محتوى الذكاء الاصطناعي"),
    ("contentAI.subtitle", "إنشاء محتوى تسويقي لمتجر الحلويات الخاص بك"),
    ("contentAI.generate", "إنشاء"),
    ("contentAI.post", "نشر الآن"),
    ("contentAI.schedule", "جدولة النشر"),
    ("contentAI.templates", "قوالب سريعة"),
    ("contentAI.history", "سجل المحتوى"),
    ("contentAI.rating.useful", "مفيد"),
    ("contentAI.rating.notRelevant", "غير ملائم"),
    ("contentAI.rating.saveTemplate", "حفظ كقالب"),
    ("contentAI.rating.saved", "تم الحفظ في القوالب"),
    ("contentAI.types.social", "التواصل الاجتماعي"),
    ("contentAI.types.whatsapp", "واتساب"),
    ("contentAI.types.email", "البريد الإلكتروني"),
    ("contentAI.culturalTemplates.ramadan.title", "رمضان"),
    ("contentAI.culturalTemplates.eidAlFitr.title", "عيد الفطر"),
];

pub(super) const LISTS: &[(&str, &[&str])] = &[
    (
        "contentAI.culturalTemplates.ramadan.templates",
        &[
            "تشكيلة حلويات رمضان المميزة متوفرة الآن",
            "قطايف وكنافة طازجة يومياً في رمضان",
            "صندوق هدايا القرقيعان للأطفال",
        ],
    ),
    (
        "contentAI.culturalTemplates.eidAlFitr.templates",
        &[
            "هدايا العيد - تشكيلة حلويات فاخرة",
            "عروض العيد - خصم 20% على جميع أنواع الشوكولاتة",
            "صناديق حلويات العيد للضيافة",
        ],
    ),
];
